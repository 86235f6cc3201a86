use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

/// Session lifetime. There is no refresh or revocation; a leaked token
/// stays valid until this window runs out.
pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Signs and verifies bearer tokens. Keys are derived once from the
/// configured secret; the algorithm is pinned to HS256.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn create_token(&self, user_id: &str) -> Result<String> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::days(TOKEN_TTL_DAYS))
            .ok_or_else(|| AppError::service("Failed to calculate token expiration"))?
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::service(format!("Token generation failed: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_round_trip() {
        let service = TokenService::new("test-secret");
        let token = service.create_token("user-42").unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-42");

        let expected = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
        // issued moments ago, so exp should sit right at the 7 day mark
        assert!(claims.exp.abs_diff(expected) < 5);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new("test-secret");
        let err = service.verify_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issuer = TokenService::new("secret-one");
        let verifier = TokenService::new("secret-two");

        let token = issuer.create_token("user-42").unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new("test-secret");
        // hand-roll a token that expired well past the validation leeway
        let claims = Claims {
            sub: "user-42".to_string(),
            exp: (Utc::now() - Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = service.verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
