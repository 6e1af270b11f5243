#[cfg(test)]
#[path = "announcements_test.rs"]
mod announcements_test;

use std::collections::HashSet;

use crate::net::types::{Announcement, Role, User};

/// Announcement list state for the dashboard.
///
/// The cached list is never patched in place after a mutation — the page
/// re-runs the full fetch so the cache always reflects the backend.
#[derive(Clone, Debug, Default)]
pub struct AnnouncementsState {
    pub items: Vec<Announcement>,
    pub loading: bool,
    deleting: HashSet<String>,
}

impl AnnouncementsState {
    /// Replace the cached list with a fresh server copy, newest first.
    pub fn set_loaded(&mut self, mut items: Vec<Announcement>) {
        sort_newest_first(&mut items);
        self.items = items;
        self.loading = false;
    }

    /// Mark one announcement's delete as in flight. Other rows stay live.
    pub fn begin_delete(&mut self, id: &str) {
        self.deleting.insert(id.to_owned());
    }

    pub fn end_delete(&mut self, id: &str) {
        self.deleting.remove(id);
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }
}

/// Order announcements by creation time, newest first. ISO-8601 timestamps
/// in a uniform format compare chronologically as strings.
pub fn sort_newest_first(items: &mut [Announcement]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Whether `user` may edit or delete `announcement`: its author, or any
/// admin. The backend enforces the same rule; this only gates the controls.
pub fn can_modify(user: Option<&User>, announcement: &Announcement) -> bool {
    match user {
        Some(user) => user.role == Role::Admin || user.email == announcement.author_email,
        None => false,
    }
}

/// Draft contents of the create/edit dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Trimmed title and content, or `None` when either is blank. Blank
    /// drafts never reach the network.
    pub fn normalized(&self) -> Option<(String, String)> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return None;
        }
        Some((title.to_owned(), content.to_owned()))
    }

    pub fn is_valid(&self) -> bool {
        self.normalized().is_some()
    }
}
