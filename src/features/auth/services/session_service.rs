//! Stateless session tokens.
//!
//! Both tokens of a pair carry the same principal and differ only in
//! lifetime and `jti`. There is no server-side session record, so a token
//! stays valid until it expires.

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::models::UserRole;

/// Source of the current time in unix seconds
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Returned for every verification failure. Malformed, tampered and expired
/// tokens are deliberately indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid or expired token")]
pub struct InvalidToken;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: i32,
    role: UserRole,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Lifetimes beyond the timestamp range are clamped, never wrapped
fn ttl_secs(ttl: std::time::Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl SessionService {
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.jwt_secret.as_bytes();

        // Expiry is checked against `clock` after decoding
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            access_ttl_secs: ttl_secs(config.access_token_ttl),
            refresh_ttl_secs: ttl_secs(config.refresh_token_ttl),
            clock,
        }
    }

    /// Sign an access/refresh pair for an already authenticated principal
    pub fn issue(&self, principal: &AuthenticatedUser) -> Result<TokenPair> {
        let now = self.clock.now();
        Ok(TokenPair {
            access_token: self.sign(principal, now, self.access_ttl_secs)?,
            refresh_token: self.sign(principal, now, self.refresh_ttl_secs)?,
        })
    }

    pub fn verify(&self, token: &str) -> std::result::Result<AuthenticatedUser, InvalidToken> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            InvalidToken
        })?;

        let claims = data.claims;
        if self.clock.now() >= claims.exp {
            tracing::debug!("Token rejected: expired at {}", claims.exp);
            return Err(InvalidToken);
        }

        Ok(AuthenticatedUser::new(claims.user_id, claims.role))
    }

    /// Verify a refresh token and mint a fresh pair from its claims.
    ///
    /// The principal is taken from the token as-is; a role changed since
    /// issuance is not picked up until the user logs in again.
    pub fn refresh(&self, refresh_token: &str) -> std::result::Result<TokenPair, InvalidToken> {
        let principal = self.verify(refresh_token)?;
        self.issue(&principal).map_err(|e| {
            tracing::error!("Failed to re-issue tokens: {}", e);
            InvalidToken
        })
    }

    fn sign(&self, principal: &AuthenticatedUser, now: i64, ttl_secs: i64) -> Result<String> {
        let claims = Claims {
            user_id: principal.user_id,
            role: principal.role,
            iat: now,
            exp: now.saturating_add(ttl_secs),
            jti: Uuid::now_v7().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }
}
