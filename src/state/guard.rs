//! Route-gating decisions.
//!
//! Pure functions over the session status; the wrapper components in
//! `app` translate the outcome into a render, a redirect, or a loading
//! placeholder. Nothing here consults the backend — the backend re-checks
//! authorization on every request regardless of what the client renders.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::SessionStatus;

/// Outcome of a navigation decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the target view.
    Render,
    /// The session is still restoring; show a placeholder.
    Loading,
    /// Redirect to the login page.
    ToLogin,
    /// Redirect to the home page.
    ToHome,
}

/// Decide whether a protected route may render for the given session.
pub fn protected(status: SessionStatus, admin_only: bool) -> RouteDecision {
    match status {
        SessionStatus::Initializing => RouteDecision::Loading,
        SessionStatus::Anonymous => RouteDecision::ToLogin,
        SessionStatus::Authenticated(role) => {
            if admin_only && role != Role::Admin {
                RouteDecision::ToHome
            } else {
                RouteDecision::Render
            }
        }
    }
}

/// Decide whether a public-only route (the login page) may render.
pub fn public_only(status: SessionStatus) -> RouteDecision {
    match status {
        SessionStatus::Initializing => RouteDecision::Loading,
        SessionStatus::Anonymous => RouteDecision::Render,
        SessionStatus::Authenticated(_) => RouteDecision::ToHome,
    }
}
