use shared::domain::{Role, UserId};

use super::support::mint_token;
use crate::token::{BearerToken, TokenError};

#[test]
fn parses_minted_token_claims() {
    let raw = mint_token("scout@example.com", 42, &["ROLE_SCOUT"]);
    let token = BearerToken::parse(&raw).expect("parse");
    let claims = token.claims();
    assert_eq!(claims.subject, "scout@example.com");
    assert_eq!(claims.user_id, UserId(42));
    assert_eq!(claims.role, Role::Scout);
    assert!(claims.expires_at.is_some());
}

#[test]
fn trims_surrounding_whitespace() {
    let raw = format!("  {}\n", mint_token("a@b.c", 1, &["ROLE_TALENT"]));
    let token = BearerToken::parse(&raw).expect("parse");
    assert_eq!(token.as_str(), raw.trim());
}

#[test]
fn rejects_empty_and_wrong_segment_counts() {
    assert!(matches!(BearerToken::parse(""), Err(TokenError::Empty)));
    assert!(matches!(BearerToken::parse("   "), Err(TokenError::Empty)));
    assert!(matches!(
        BearerToken::parse("onlyonesegment"),
        Err(TokenError::SegmentCount(1))
    ));
    assert!(matches!(
        BearerToken::parse("a.b"),
        Err(TokenError::SegmentCount(2))
    ));
    assert!(matches!(
        BearerToken::parse("a.b.c.d"),
        Err(TokenError::SegmentCount(4))
    ));
}

#[test]
fn rejects_garbage_payload() {
    assert!(matches!(
        BearerToken::parse("aaa.!!!.ccc"),
        Err(TokenError::Payload(_))
    ));

    // Valid base64, but not a JSON object.
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    let payload = URL_SAFE_NO_PAD.encode(b"not json");
    assert!(matches!(
        BearerToken::parse(&format!("aaa.{payload}.ccc")),
        Err(TokenError::Claims(_))
    ));
}

fn token_with_payload(payload: serde_json::Value) -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("aaa.{payload}.ccc")
}

#[test]
fn rejects_claims_missing_subject_or_user_id() {
    let missing_user = token_with_payload(serde_json::json!({
        "sub": "a@b.c",
        "roles": [{"authority": "ROLE_TALENT"}],
    }));
    assert!(matches!(
        BearerToken::parse(&missing_user),
        Err(TokenError::MissingUserId)
    ));

    let missing_subject = token_with_payload(serde_json::json!({
        "userId": 5,
        "roles": [{"authority": "ROLE_TALENT"}],
    }));
    assert!(matches!(
        BearerToken::parse(&missing_subject),
        Err(TokenError::MissingSubject)
    ));
}

#[test]
fn rejects_claims_without_roles_list() {
    let raw = token_with_payload(serde_json::json!({
        "sub": "a@b.c",
        "userId": 5,
    }));
    assert!(matches!(
        BearerToken::parse(&raw),
        Err(TokenError::MissingRoles)
    ));
}

#[test]
fn empty_roles_list_defaults_to_talent() {
    let raw = token_with_payload(serde_json::json!({
        "sub": "a@b.c",
        "userId": 5,
        "roles": [],
    }));
    let token = BearerToken::parse(&raw).expect("parse");
    assert_eq!(token.claims().role, Role::Talent);
}

#[test]
fn accepts_bare_and_prefixed_authorities() {
    let prefixed = mint_token("a@b.c", 1, &["ROLE_ADMIN"]);
    assert_eq!(
        BearerToken::parse(&prefixed).expect("parse").claims().role,
        Role::Admin
    );

    let bare = mint_token("a@b.c", 1, &["ADMIN"]);
    assert_eq!(
        BearerToken::parse(&bare).expect("parse").claims().role,
        Role::Admin
    );
}

#[test]
fn unknown_authority_is_an_error_not_a_default() {
    let raw = mint_token("a@b.c", 1, &["ROLE_SUPERUSER"]);
    assert!(matches!(
        BearerToken::parse(&raw),
        Err(TokenError::UnknownRole(authority)) if authority == "ROLE_SUPERUSER"
    ));
}

#[test]
fn only_first_authority_is_read() {
    let raw = mint_token("a@b.c", 1, &["ROLE_SCOUT", "ROLE_ADMIN"]);
    assert_eq!(
        BearerToken::parse(&raw).expect("parse").claims().role,
        Role::Scout
    );
}
