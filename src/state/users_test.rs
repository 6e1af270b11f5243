use super::*;

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@company.com"),
        role,
    }
}

fn loaded() -> AdminUsersState {
    let mut state = AdminUsersState::default();
    state.set_loaded(vec![user("u-1", Role::Admin), user("u-2", Role::User)]);
    state
}

// =============================================================
// Role edits
// =============================================================

#[test]
fn fresh_rows_have_no_unsaved_changes() {
    let state = loaded();
    assert!(state.rows.iter().all(|row| !row.has_unsaved_changes()));
}

#[test]
fn selecting_a_new_role_marks_the_row_unsaved() {
    let mut state = loaded();
    state.select_role("u-2", Role::Admin);
    assert!(state.rows[1].has_unsaved_changes());
    // The server-confirmed role is untouched until a save succeeds.
    assert_eq!(state.rows[1].user.role, Role::User);
}

#[test]
fn reselecting_the_original_role_clears_the_flag() {
    let mut state = loaded();
    state.select_role("u-2", Role::Admin);
    state.select_role("u-2", Role::User);
    assert!(!state.rows[1].has_unsaved_changes());
}

#[test]
fn reload_discards_unsaved_edits() {
    let mut state = loaded();
    state.select_role("u-2", Role::Admin);

    // Navigate away and back: the page re-fetches from the backend.
    state.set_loaded(vec![user("u-1", Role::Admin), user("u-2", Role::User)]);
    assert_eq!(state.rows[1].selected_role, Role::User);
    assert!(!state.rows[1].has_unsaved_changes());
}

// =============================================================
// Save lifecycle
// =============================================================

#[test]
fn begin_save_flags_only_the_target_row() {
    let mut state = loaded();
    state.begin_save("u-2");
    assert!(state.rows[1].saving);
    assert!(!state.rows[0].saving);
}

#[test]
fn finish_save_adopts_the_server_record() {
    let mut state = loaded();
    state.select_role("u-2", Role::Admin);
    state.begin_save("u-2");

    state.finish_save(user("u-2", Role::Admin));
    assert_eq!(state.rows[1].user.role, Role::Admin);
    assert!(!state.rows[1].saving);
    assert!(!state.rows[1].has_unsaved_changes());
}

#[test]
fn failed_save_keeps_the_edit_pending() {
    let mut state = loaded();
    state.select_role("u-2", Role::Admin);
    state.begin_save("u-2");

    state.fail_save("u-2");
    assert!(!state.rows[1].saving);
    assert!(state.rows[1].has_unsaved_changes());
    assert_eq!(state.rows[1].user.role, Role::User);
}

#[test]
fn finish_save_for_an_unknown_user_is_ignored() {
    let mut state = loaded();
    state.finish_save(user("u-9", Role::Admin));
    assert_eq!(state.rows.len(), 2);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn counts_follow_server_confirmed_roles() {
    let mut state = loaded();
    assert_eq!(state.admin_count(), 1);
    assert_eq!(state.user_count(), 1);

    // An unsaved edit does not move the counters.
    state.select_role("u-2", Role::Admin);
    assert_eq!(state.admin_count(), 1);

    state.finish_save(user("u-2", Role::Admin));
    assert_eq!(state.admin_count(), 2);
    assert_eq!(state.user_count(), 0);
}
