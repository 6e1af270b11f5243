//! Durable session storage.
//!
//! Persists the bearer token and the cached identity as two `localStorage`
//! entries. The pair is all-or-nothing: `load` never yields a token without
//! an identity or vice versa, and anything unreadable counts as logged out.
//! Requires a browser environment; outside one the store reads as empty.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "teamboard_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "teamboard_user";

/// What the store currently holds. Either both fields are set or neither is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl StoredSession {
    /// Combine the two raw storage entries into a session. Returns the empty
    /// session unless the token is present and the identity JSON parses.
    pub fn decode(token: Option<String>, user_json: Option<String>) -> Self {
        let (Some(token), Some(raw)) = (token, user_json) else {
            return Self::default();
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Self { token: Some(token), user: Some(user) },
            Err(_) => Self::default(),
        }
    }
}

/// Serialize an identity for storage.
pub fn encode_user(user: &User) -> String {
    serde_json::to_string(user).unwrap_or_default()
}

/// Persist a session: token and identity together.
pub fn save(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, &encode_user(user));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Read the persisted session. Malformed entries are wiped and read as an
/// empty session rather than surfacing a parse error.
pub fn load() -> StoredSession {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return StoredSession::default();
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let raw_user = storage.get_item(USER_KEY).ok().flatten();
        let had_user = raw_user.is_some();

        let session = StoredSession::decode(token, raw_user);
        if had_user && session.user.is_none() {
            log::warn!("stored session was unreadable; treating as logged out");
            clear();
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        StoredSession::default()
    }
}

/// Remove both entries.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
