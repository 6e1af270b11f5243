use super::*;

// =============================================================
// Protected routes
// =============================================================

#[test]
fn initializing_shows_loading_placeholder() {
    assert_eq!(protected(SessionStatus::Initializing, false), RouteDecision::Loading);
    assert_eq!(protected(SessionStatus::Initializing, true), RouteDecision::Loading);
}

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(protected(SessionStatus::Anonymous, false), RouteDecision::ToLogin);
    assert_eq!(protected(SessionStatus::Anonymous, true), RouteDecision::ToLogin);
}

#[test]
fn authenticated_user_renders_plain_routes() {
    assert_eq!(
        protected(SessionStatus::Authenticated(Role::User), false),
        RouteDecision::Render
    );
}

#[test]
fn authenticated_user_is_bounced_from_admin_routes() {
    assert_eq!(
        protected(SessionStatus::Authenticated(Role::User), true),
        RouteDecision::ToHome
    );
}

#[test]
fn authenticated_admin_renders_everything() {
    assert_eq!(
        protected(SessionStatus::Authenticated(Role::Admin), false),
        RouteDecision::Render
    );
    assert_eq!(
        protected(SessionStatus::Authenticated(Role::Admin), true),
        RouteDecision::Render
    );
}

// =============================================================
// Public-only routes
// =============================================================

#[test]
fn public_only_waits_for_restore() {
    assert_eq!(public_only(SessionStatus::Initializing), RouteDecision::Loading);
}

#[test]
fn public_only_passes_anonymous_through() {
    assert_eq!(public_only(SessionStatus::Anonymous), RouteDecision::Render);
}

#[test]
fn public_only_redirects_authenticated_sessions_home() {
    assert_eq!(
        public_only(SessionStatus::Authenticated(Role::User)),
        RouteDecision::ToHome
    );
    assert_eq!(
        public_only(SessionStatus::Authenticated(Role::Admin)),
        RouteDecision::ToHome
    );
}
