//! Bearer tokens.
//!
//! `/login/` hands out an HS256 JWT carrying the username (`sub`) and the user
//! id (`id`). Every protected route verifies it and works on the embedded id
//! only, so callers can never address another user's data.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::ServerError;

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    id: i32,
    iat: i64,
    exp: i64,
}

/// Identity of the caller, extracted from a verified token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

/// Signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: TimeDelta,
}

impl TokenKeys {
    pub fn new(secret: &[u8], ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: TimeDelta::minutes(ttl_minutes),
        }
    }

    /// Sign a token for `user`, valid for the configured lifetime.
    pub fn issue(&self, user: &engine::User) -> Result<String, ServerError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.username.clone(),
            id: user.id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ServerError::Internal(format!("failed to sign token: {err}")))
    }

    /// Check signature and expiry of `token`.
    pub fn verify(&self, token: &str) -> Result<AuthUser, ServerError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            tracing::debug!("rejected bearer token: {err}");
            ServerError::Unauthorized
        })?;

        Ok(AuthUser {
            id: data.claims.id,
            username: data.claims.sub,
        })
    }
}
