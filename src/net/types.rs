#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level of an account. The backend re-checks this on every request;
/// the client copy only gates what gets rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Human-facing label for badges and selects.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }

    /// Parse a select-control value. Anything unrecognized is a plain user.
    pub fn parse(value: &str) -> Self {
        if value == "admin" { Role::Admin } else { Role::User }
    }
}

/// The authenticated user's identity as known to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// A published announcement. Timestamps are ISO-8601 strings straight from
/// the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response to `POST /api/auth/signup` and `POST /api/auth/signin`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
}

/// Response to `GET /api/auth/user`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub user: User,
}

/// Response to `PUT /api/admin/users/:id/role`.
#[derive(Clone, Debug, Deserialize)]
pub struct RoleUpdateResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// Response to `DELETE /api/announcements/:id`.
#[derive(Clone, Debug, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
