//! JWT Token Handler
//! Mission: Issue and validate signed, time-limited admin tokens

use crate::auth::models::{AdminIdentity, Claims};
use anyhow::{bail, Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Token lifetime in seconds
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// JWT Handler for token operations
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl JwtHandler {
    /// Create a handler issuing one-hour tokens. An empty secret is refused.
    pub fn new(secret: &str) -> Result<Self> {
        Self::with_lifetime(secret, Duration::seconds(TOKEN_LIFETIME_SECS))
    }

    /// Create a handler with a custom token lifetime.
    pub fn with_lifetime(secret: &str, lifetime: Duration) -> Result<Self> {
        if secret.trim().is_empty() {
            bail!("JWT secret must not be empty");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expired means expired: no grace window.
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        })
    }

    /// Generate a JWT token for an admin. Returns the token and its lifetime in seconds.
    pub fn generate_token(&self, admin: &AdminIdentity) -> Result<(String, usize)> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.lifetime)
            .context("Invalid timestamp")?
            .timestamp();

        let claims = Claims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            iat: now.timestamp().max(0) as usize,
            exp: expiration.max(0) as usize,
        };

        debug!(
            "Generating JWT for admin {} ({}), expires in {}s",
            admin.username,
            admin.id,
            self.lifetime.num_seconds()
        );

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Failed to generate JWT")?;

        Ok((token, self.lifetime.num_seconds().max(0) as usize))
    }

    /// Validate signature and expiry, returning the claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .context("Invalid or expired token")?;

        // exp itself is already expired; jsonwebtoken alone accepts exp == now
        if decoded.claims.exp as i64 <= Utc::now().timestamp() {
            bail!("Invalid or expired token");
        }

        debug!("Validated JWT for admin {}", decoded.claims.username);

        Ok(decoded.claims)
    }
}
