//! Reusable UI components.

pub mod announcement_card;
pub mod create_edit_dialog;
pub mod layout;
pub mod toast_host;
