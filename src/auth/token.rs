//! ID-token claim extraction
//!
//! When no database is configured the session is stateless: the profile is
//! built straight from the identity provider's token claims. The payload is
//! base64-decoded without signature verification; the demo deployment has no
//! secret to verify against.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Tier, UserProfile};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token format")]
    Malformed,

    #[error("failed to decode token payload: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("failed to parse token claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Subset of OpenID Connect claims the session cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

/// Decode the payload segment of a JWT-shaped id token.
pub fn decode_id_token(token: &str) -> Result<IdTokenClaims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed);
    }

    use base64::Engine;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(parts[1])?;

    let claims: IdTokenClaims = serde_json::from_slice(&payload)?;
    Ok(claims)
}

/// Build the stateless session profile from token claims: zero credits,
/// basic tier, pending enrichment.
pub fn stateless_profile(claims: IdTokenClaims) -> UserProfile {
    UserProfile {
        id: claims.sub,
        name: claims.name.unwrap_or_default(),
        email: claims.email.unwrap_or_default(),
        image: claims.picture,
        credits: 0,
        tier: Tier::Basic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn make_token(payload: serde_json::Value) -> String {
        let encoded =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJub25lIn0.{encoded}.sig")
    }

    #[test]
    fn decodes_claims_from_the_payload_segment() {
        let token = make_token(serde_json::json!({
            "sub": "user-123",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
        }));

        let claims = decode_id_token(&token).expect("valid token");
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email.as_deref(), Some("ada@example.com"));

        let profile = stateless_profile(claims);
        assert_eq!(profile.id, "user-123");
        assert_eq!(profile.credits, 0);
        assert_eq!(profile.tier, Tier::Basic);
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert!(matches!(
            decode_id_token("not-a-jwt"),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn rejects_garbage_payloads() {
        assert!(decode_id_token("a.!!!.c").is_err());
    }
}
