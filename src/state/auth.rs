#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and the one-time startup
/// restore.
///
/// `loading` starts true and drops to false exactly once, when the
/// persisted session has been read; it is never re-entered after that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Session lifecycle as seen by the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// The persisted session has not been read yet.
    Initializing,
    /// No user is signed in.
    Anonymous,
    /// A user is signed in with the given role.
    Authenticated(Role),
}

impl AuthState {
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            return SessionStatus::Initializing;
        }
        match &self.user {
            Some(user) => SessionStatus::Authenticated(user.role),
            None => SessionStatus::Anonymous,
        }
    }

    /// Complete the startup restore with whatever the session store held.
    pub fn finish_restore(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Adopt a freshly authenticated identity.
    pub fn authenticate(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the current identity. Safe to call when already anonymous.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.status(), SessionStatus::Authenticated(Role::Admin))
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }
}
