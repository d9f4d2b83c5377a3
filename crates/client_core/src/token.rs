use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use shared::domain::{Role, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,
    #[error("token must have three segments, found {0}")]
    SegmentCount(usize),
    #[error("token payload is not valid base64: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("token claims are not a JSON object: {0}")]
    Claims(#[from] serde_json::Error),
    #[error("token claims are missing a subject")]
    MissingSubject,
    #[error("token claims are missing a user id")]
    MissingUserId,
    #[error("token claims carry no roles list")]
    MissingRoles,
    #[error("unknown role authority '{0}'")]
    UnknownRole(String),
}

#[derive(Debug, Deserialize)]
struct RawAuthority {
    authority: String,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
    #[serde(rename = "userId")]
    user_id: Option<i64>,
    roles: Option<Vec<RawAuthority>>,
    exp: Option<i64>,
}

/// Claims the client reads out of the bearer token payload.
///
/// The payload is decoded without signature verification: the client never
/// holds the signing key and trusts the transport, the same trust model the
/// service has always assumed. `expires_at` is carried for display but not
/// enforced locally; the server rejects stale tokens with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: String,
    pub user_id: UserId,
    pub role: Role,
    pub expires_at: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct BearerToken {
    raw: String,
    claims: TokenClaims,
}

impl BearerToken {
    /// Validates the structural shape of a bearer token and extracts its
    /// claims. Exactly three dot-separated segments are required; anything
    /// else is treated as garbage and must never reach the wire.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TokenError::Empty);
        }

        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::SegmentCount(segments.len()));
        }

        let payload = URL_SAFE_NO_PAD.decode(segments[1])?;
        let claims: RawClaims = serde_json::from_slice(&payload)?;

        let subject = claims.sub.filter(|s| !s.is_empty()).ok_or(TokenError::MissingSubject)?;
        let user_id = claims.user_id.ok_or(TokenError::MissingUserId)?;
        let roles = claims.roles.ok_or(TokenError::MissingRoles)?;

        // An empty authority list has always meant a plain talent account.
        let role = match roles.first() {
            None => Role::Talent,
            Some(first) => Role::from_authority(&first.authority)
                .ok_or_else(|| TokenError::UnknownRole(first.authority.clone()))?,
        };

        Ok(Self {
            raw: raw.to_string(),
            claims: TokenClaims {
                subject,
                user_id: UserId(user_id),
                role,
                expires_at: claims.exp,
            },
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }
}
