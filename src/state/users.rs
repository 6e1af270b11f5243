#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Role, User};

/// One row of the admin user table: the server record plus a client-only
/// role edit. The edit is never persisted anywhere — it only survives as
/// long as the row does, and reaches the backend solely as the payload of
/// an explicit save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub user: User,
    pub selected_role: Role,
    pub saving: bool,
}

impl UserRow {
    pub fn new(user: User) -> Self {
        Self { selected_role: user.role, user, saving: false }
    }

    /// True while the selected role differs from the last server-confirmed
    /// one. Re-selecting the original role clears it.
    pub fn has_unsaved_changes(&self) -> bool {
        self.selected_role != self.user.role
    }
}

/// Admin user-management state.
#[derive(Clone, Debug, Default)]
pub struct AdminUsersState {
    pub rows: Vec<UserRow>,
    pub loading: bool,
}

impl AdminUsersState {
    /// Replace all rows with a fresh server copy. Local edits are discarded.
    pub fn set_loaded(&mut self, users: Vec<User>) {
        self.rows = users.into_iter().map(UserRow::new).collect();
        self.loading = false;
    }

    pub fn select_role(&mut self, user_id: &str, role: Role) {
        if let Some(row) = self.row_mut(user_id) {
            row.selected_role = role;
        }
    }

    /// Mark one row's save as in flight. Other rows stay editable.
    pub fn begin_save(&mut self, user_id: &str) {
        if let Some(row) = self.row_mut(user_id) {
            row.saving = true;
        }
    }

    /// Adopt the server-confirmed record after a successful role save.
    pub fn finish_save(&mut self, updated: User) {
        let Some(row) = self.row_mut(&updated.id) else { return };
        row.selected_role = updated.role;
        row.saving = false;
        row.user = updated;
    }

    /// A failed save re-enables the row without touching its edit.
    pub fn fail_save(&mut self, user_id: &str) {
        if let Some(row) = self.row_mut(user_id) {
            row.saving = false;
        }
    }

    pub fn admin_count(&self) -> usize {
        self.rows.iter().filter(|row| row.user.role == Role::Admin).count()
    }

    pub fn user_count(&self) -> usize {
        self.rows.iter().filter(|row| row.user.role == Role::User).count()
    }

    fn row_mut(&mut self, user_id: &str) -> Option<&mut UserRow> {
        self.rows.iter_mut().find(|row| row.user.id == user_id)
    }
}
