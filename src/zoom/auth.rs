//! Per-request JWT signing for the Zoom API.
//!
//! Zoom's JWT app auth: HS256, `iss` set to the API key, short expiry.
//! Tokens are cheap to sign, so a fresh one is minted for every request
//! rather than cached and refreshed.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::error::ZoomError;

#[derive(Debug, Serialize, Deserialize)]
struct ApiClaims {
    iss: String,
    exp: i64,
}

pub struct JwtSigner {
    api_key: String,
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

impl JwtSigner {
    pub fn new(api_key: &str, api_secret: &str, ttl_seconds: u64) -> Self {
        Self {
            api_key: api_key.to_string(),
            encoding_key: EncodingKey::from_secret(api_secret.as_bytes()),
            ttl_seconds: ttl_seconds as i64,
        }
    }

    /// Signs a token valid for the configured TTL.
    pub fn token(&self) -> Result<String, ZoomError> {
        let claims = ApiClaims {
            iss: self.api_key.clone(),
            exp: (Utc::now() + chrono::Duration::seconds(self.ttl_seconds)).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }
}
