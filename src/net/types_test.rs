use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).ok().as_deref(), Some("\"admin\""));
    assert_eq!(serde_json::to_string(&Role::User).ok().as_deref(), Some("\"user\""));
}

#[test]
fn role_deserializes_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").ok(), Some(Role::Admin));
    assert_eq!(serde_json::from_str::<Role>("\"user\"").ok(), Some(Role::User));
}

#[test]
fn role_parse_defaults_to_user() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("user"), Role::User);
    assert_eq!(Role::parse("superuser"), Role::User);
}

#[test]
fn role_as_str_matches_wire_format() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::User.as_str(), "user");
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn user_deserializes_and_ignores_extra_fields() {
    // The admin list includes created_at; the identity payload does not.
    let raw = r#"{"id":"u-1","email":"admin@company.com","role":"admin","created_at":"2024-12-15T10:30:00"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, "admin@company.com");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn announcement_deserializes_backend_shape() {
    let raw = r#"{
        "id": "a-1",
        "title": "Office hours",
        "content": "Flexible hours start Monday.",
        "author_id": "u-1",
        "author_email": "admin@company.com",
        "created_at": "2024-12-15T10:30:00.000000",
        "updated_at": "2024-12-15T10:30:00.000000"
    }"#;
    let announcement: Announcement = serde_json::from_str(raw).unwrap();
    assert_eq!(announcement.title, "Office hours");
    assert_eq!(announcement.author_email, "admin@company.com");
}

#[test]
fn auth_response_deserializes() {
    let raw = r#"{"success":true,"token":"jwt-token","user":{"id":"u-1","email":"a@b.c","role":"user"}}"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.token, "jwt-token");
    assert_eq!(resp.user.role, Role::User);
}

#[test]
fn role_update_response_deserializes() {
    let raw = r#"{
        "success": true,
        "message": "User role updated successfully",
        "user": {"id":"u-2","email":"john@company.com","role":"admin"}
    }"#;
    let resp: RoleUpdateResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.user.role, Role::Admin);
}
