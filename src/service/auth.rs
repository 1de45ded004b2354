//! Password hashing (Argon2id) and access-token signing.

use crate::config::Settings;
use crate::error::AppError;
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("password hash: {}", e)))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Sign a token for `user_id`. Returns the token and its lifetime in seconds.
pub fn issue_token(settings: &Settings, user_id: Uuid, username: &str) -> Result<(String, i64), AppError> {
    let now = chrono::Utc::now();
    let ttl = chrono::Duration::minutes(settings.jwt_access_token_expire_minutes);
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    let token = encode(
        &Header::new(settings.jwt_algorithm),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret_key.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing: {}", e)))?;
    Ok((token, ttl.num_seconds()))
}

/// Verify a token from `issue_token` and return its claims. Library API for
/// callers that guard their own routes; the bundled router issues tokens only.
pub fn decode_token(settings: &Settings, token: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret_key.as_bytes()),
        &Validation::new(settings.jwt_algorithm),
    )
    .map_err(|e| AppError::Unauthorized(format!("invalid token: {}", e)))?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("trustno1!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("trustno1!", &hash).unwrap());
        assert!(!verify_password("trustno2!", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash_password("trustno1!").unwrap(), hash_password("trustno1!").unwrap());
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        assert!(matches!(verify_password("x", "plaintext"), Err(AppError::Internal(_))));
    }

    #[test]
    fn token_carries_user_and_expiry() {
        let settings = Settings {
            jwt_secret_key: "s3cret".into(),
            jwt_algorithm: Algorithm::HS384,
            jwt_access_token_expire_minutes: 15,
            ..Settings::default()
        };
        let id = Uuid::new_v4();
        let (token, expires_in) = issue_token(&settings, id, "mulder").unwrap();
        assert_eq!(expires_in, 15 * 60);
        let claims = decode_token(&settings, &token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.username, "mulder");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let settings = Settings::default();
        let past = chrono::Utc::now().timestamp() - 3600;
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "skinner".into(),
            iat: past - 60,
            exp: past,
        };
        let token = encode(
            &Header::new(settings.jwt_algorithm),
            &claims,
            &EncodingKey::from_secret(settings.jwt_secret_key.as_bytes()),
        )
        .unwrap();
        assert!(matches!(decode_token(&settings, &token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let signer = Settings { jwt_secret_key: "one".into(), ..Settings::default() };
        let verifier = Settings { jwt_secret_key: "two".into(), ..Settings::default() };
        let (token, _) = issue_token(&signer, Uuid::new_v4(), "scully").unwrap();
        assert!(matches!(decode_token(&verifier, &token), Err(AppError::Unauthorized(_))));
    }
}
