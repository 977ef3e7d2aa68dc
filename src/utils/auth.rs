use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::utils::errors::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub struct AuthUtils;

impl AuthUtils {
    pub fn hash(input: &str) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        hasher.finalize().to_vec()
    }

    pub fn verify_hash(input: &str, expected_hash: &[u8]) -> bool {
        Self::hash(input) == expected_hash
    }

    pub fn generate_token(sub: &str, minutes: i64, secret: &str) -> Result<String, ApiError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::minutes(minutes))
            .ok_or_else(|| ApiError::InternalServerError("invalid token expiry".to_string()))?
            .timestamp() as usize;

        let claims = Claims {
            sub: sub.to_owned(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|e| ApiError::InternalServerError(e.to_string()))
    }

    pub fn verify_token(token: &str, secret: &str) -> bool {
        let validation = Validation::default();
        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation).is_ok()
    }
}
