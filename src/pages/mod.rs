//! Page-level components, one per route.

pub mod admin;
pub mod dashboard;
pub mod login;
