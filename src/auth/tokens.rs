/**
 * Token Service
 *
 * This module handles JWT issuing and verification. Tokens are stateless:
 * the only identity claim is the user id, signed with a symmetric key.
 * Validity is purely cryptographic and temporal, never store-backed.
 *
 * # Key Handling
 *
 * The signing key comes from configuration (`JWT_SECRET`) and is built
 * once at startup into a `JwtKeys` value that is passed explicitly into
 * every verification site via application state. There is no ambient
 * global key lookup, so rotating the secret is a config change plus a
 * restart (which invalidates all outstanding tokens).
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a decimal string
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Pre-built signing and verification keys plus the token lifetime.
///
/// Built once from `ServerConfig` and shared via `AppState`.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_ttl_secs: u64,
}

impl JwtKeys {
    /// Build keys from the configured symmetric secret
    ///
    /// # Arguments
    /// * `secret` - HMAC secret for HS256 signing
    /// * `token_ttl_secs` - Lifetime of issued tokens in seconds
    pub fn new(secret: &str, token_ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            token_ttl_secs,
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Issue a signed token for a user
///
/// The user id is the sole identity claim. An expiry claim is attached
/// so leaked tokens eventually die.
///
/// # Arguments
/// * `keys` - Signing keys from application state
/// * `user_id` - The authenticated user's id
///
/// # Returns
/// JWT token string
pub fn issue_token(
    keys: &JwtKeys,
    user_id: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + keys.token_ttl_secs,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify a token and extract the user id it asserts
///
/// Verification is a signature check plus an expiry check, both pure
/// functions of the token and the current time.
///
/// # Arguments
/// * `keys` - Verification keys from application state
/// * `token` - Raw JWT string (without any `Bearer ` prefix)
///
/// # Returns
/// The user id claimed by the token, or an error
pub fn verify_token(keys: &JwtKeys, token: &str) -> Result<i64, jsonwebtoken::errors::Error> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(token, &keys.decoding, &validation)?;

    token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| jsonwebtoken::errors::Error::from(ErrorKind::InvalidSubject))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> JwtKeys {
        JwtKeys::new("test-secret", 60 * 60)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let keys = test_keys();
        let token = issue_token(&keys, 42).unwrap();
        assert!(!token.is_empty());

        let user_id = verify_token(&keys, &token).unwrap();
        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_verify_garbage_token() {
        let keys = test_keys();
        assert!(verify_token(&keys, "not.a.token").is_err());
        assert!(verify_token(&keys, "").is_err());
    }

    #[test]
    fn test_verify_with_wrong_key() {
        let keys = test_keys();
        let other_keys = JwtKeys::new("different-secret", 60 * 60);

        let token = issue_token(&keys, 7).unwrap();
        assert!(verify_token(&other_keys, &token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = test_keys();
        let token = issue_token(&keys, 7).unwrap();

        // Perturb the first character of the payload segment
        let dot = token.find('.').unwrap();
        let mut tampered: Vec<u8> = token.into_bytes();
        tampered[dot + 1] = if tampered[dot + 1] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(verify_token(&keys, &tampered).is_err());
    }

    #[test]
    fn test_claims_carry_expiry() {
        let keys = test_keys();
        let token = issue_token(&keys, 1).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test-secret".as_ref()),
            &Validation::default(),
        )
        .unwrap();
        assert!(data.claims.exp > data.claims.iat);
        assert_eq!(data.claims.sub, "1");
    }
}
