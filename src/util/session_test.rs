use super::*;

use crate::net::types::Role;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "admin@company.com".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================
// decode / encode
// =============================================================

#[test]
fn saved_session_round_trips() {
    let session = StoredSession::decode(Some("jwt-token".to_owned()), Some(encode_user(&user())));
    assert_eq!(session.token.as_deref(), Some("jwt-token"));
    assert_eq!(session.user, Some(user()));
}

#[test]
fn cleared_store_reads_empty() {
    assert_eq!(StoredSession::decode(None, None), StoredSession::default());
}

#[test]
fn token_without_identity_reads_empty() {
    let session = StoredSession::decode(Some("jwt-token".to_owned()), None);
    assert_eq!(session, StoredSession::default());
}

#[test]
fn identity_without_token_reads_empty() {
    let session = StoredSession::decode(None, Some(encode_user(&user())));
    assert_eq!(session, StoredSession::default());
}

#[test]
fn unparseable_identity_reads_empty() {
    let session = StoredSession::decode(
        Some("jwt-token".to_owned()),
        Some("{not valid json".to_owned()),
    );
    assert_eq!(session, StoredSession::default());
}

#[test]
fn identity_with_wrong_shape_reads_empty() {
    let session = StoredSession::decode(
        Some("jwt-token".to_owned()),
        Some(r#"{"email":"only-an-email"}"#.to_owned()),
    );
    assert_eq!(session, StoredSession::default());
}
