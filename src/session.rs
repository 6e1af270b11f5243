//! Auth session manager.
//!
//! Owns the single `AuthState` signal for the whole app and is the only
//! place allowed to change it. Components observe the signal through this
//! handle; every write goes through the operations below, which keep the
//! signal and the durable session store in lockstep.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Role, User};
use crate::net::unauthorized;
use crate::state::auth::AuthState;
use crate::util::session as session_store;

/// Cheap copyable handle around the shared auth signal, provided via
/// context from the root component.
#[derive(Clone, Copy)]
pub struct AuthSession {
    pub state: RwSignal<AuthState>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Create a session handle and provide it to all child components.
    pub fn provide() -> Self {
        let session = Self::new();
        provide_context(session);
        session
    }

    /// One-time startup restore: read the persisted session and leave the
    /// initializing state, authenticated or not.
    pub fn restore(self) {
        let stored = session_store::load();
        self.state.update(|state| state.finish_restore(stored.user));
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token/identity pair is persisted and the state
    /// becomes authenticated. On failure the state is untouched and the
    /// reason comes back as a display string — this never panics and
    /// nothing is thrown past this boundary.
    ///
    /// # Errors
    ///
    /// The backend's reason for rejecting the credentials.
    pub async fn sign_in(self, email: &str, password: &str) -> Result<User, String> {
        let resp = api::sign_in(email, password).await?;
        if !resp.success {
            return Err("Sign in failed".to_owned());
        }
        session_store::save(&resp.token, &resp.user);
        self.state.update(|state| state.authenticate(resp.user.clone()));
        Ok(resp.user)
    }

    /// Create an account and open a session for it.
    ///
    /// # Errors
    ///
    /// The backend's reason for rejecting the signup (e.g. duplicate email).
    pub async fn sign_up(self, email: &str, password: &str, role: Role) -> Result<User, String> {
        let resp = api::sign_up(email, password, role).await?;
        if !resp.success {
            return Err("Sign up failed".to_owned());
        }
        session_store::save(&resp.token, &resp.user);
        self.state.update(|state| state.authenticate(resp.user.clone()));
        Ok(resp.user)
    }

    /// Clear the persisted session and become anonymous. Safe to call when
    /// already anonymous.
    pub fn log_out(self) {
        session_store::clear();
        self.state.update(AuthState::sign_out);
    }

    /// Re-fetch the identity behind the cached token and adopt it, so a
    /// role change made by an admin is picked up without a fresh login.
    /// Silent when the probe fails; a 401 is handled by the installed hook.
    pub async fn refresh(self) {
        if let Some(user) = api::fetch_current_user().await {
            if let Some(token) = session_store::load().token {
                session_store::save(&token, &user);
            }
            self.state.update(|state| state.authenticate(user));
        }
    }

    /// Snapshot read, for event handlers. Views should derive from `state`.
    pub fn is_admin(self) -> bool {
        self.state.with_untracked(AuthState::is_admin)
    }

    /// Subscribe the manager to the resource clients' 401 hook: any
    /// unauthorized response tears the session down and lands on the login
    /// page, overriding whatever else was going on.
    pub fn install_unauthorized_handler(self) {
        let state = self.state;
        unauthorized::set_handler(move || {
            #[cfg(feature = "hydrate")]
            log::warn!("unauthorized response; clearing session");
            session_store::clear();
            state.update(AuthState::sign_out);
            redirect_to_login();
        });
    }
}

fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
