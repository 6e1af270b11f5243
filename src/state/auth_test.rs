use super::*;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "admin@company.com".to_owned(),
        role,
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn starts_initializing() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.status(), SessionStatus::Initializing);
}

#[test]
fn restore_with_stored_user_authenticates() {
    let mut state = AuthState::default();
    state.finish_restore(Some(user(Role::User)));
    assert_eq!(state.status(), SessionStatus::Authenticated(Role::User));
}

#[test]
fn restore_with_empty_store_goes_anonymous() {
    let mut state = AuthState::default();
    state.finish_restore(None);
    assert_eq!(state.status(), SessionStatus::Anonymous);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn authenticate_reports_admin_role() {
    let mut state = AuthState::default();
    state.authenticate(user(Role::Admin));
    assert_eq!(state.status(), SessionStatus::Authenticated(Role::Admin));
    assert!(state.is_admin());
}

#[test]
fn plain_user_is_not_admin() {
    let mut state = AuthState::default();
    state.authenticate(user(Role::User));
    assert!(!state.is_admin());
}

#[test]
fn sign_out_is_idempotent() {
    let mut state = AuthState::default();
    state.authenticate(user(Role::Admin));

    state.sign_out();
    assert_eq!(state.status(), SessionStatus::Anonymous);

    state.sign_out();
    assert_eq!(state.status(), SessionStatus::Anonymous);
}

#[test]
fn email_tracks_the_current_user() {
    let mut state = AuthState::default();
    assert_eq!(state.email(), None);
    state.authenticate(user(Role::User));
    assert_eq!(state.email(), Some("admin@company.com"));
}
