//! Bearer token issuance and validation.
//!
//! Tokens are JWTs signed with HS256 using the configured secret. Claims
//! carry the principal's id, email, verification flag, and role; the role
//! separates customer tokens from vendor tokens so one cannot be replayed
//! against the other surface.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Which surface a token authenticates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Vendor,
}

/// Claims carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal's database id.
    pub sub: i32,
    /// Principal's email at issuance time.
    pub email: String,
    /// Whether the account was verified at issuance time. Re-issued after
    /// OTP verification so the flag stays current.
    pub verified: bool,
    /// Customer or vendor.
    pub role: Role,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Signing and validation state, built once at startup.
#[derive(Clone)]
pub struct JwtKeys {
    header: Header,
    validation: Validation,
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    /// Build keys from the configured secret and token lifetime.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_hours: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        Self {
            header: Header::new(Algorithm::HS256),
            validation: Validation::new(Algorithm::HS256),
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issue a token for a principal, expiring `ttl` from `now`.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if encoding fails.
    pub fn issue(
        &self,
        sub: i32,
        email: &str,
        verified: bool,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub,
            email: email.to_owned(),
            verified,
            role,
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&self.header, &claims, &self.encoding)
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if the signature is invalid or
    /// the token has expired.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data: TokenData<Claims> = jsonwebtoken::decode(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new(&SecretString::from("0123456789abcdef0123456789abcdef"), 24)
    }

    #[test]
    fn test_issue_then_decode() {
        let keys = keys();
        let token = keys
            .issue(7, "diner@example.com", false, Role::Customer, Utc::now())
            .unwrap();

        let claims = keys.decode(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "diner@example.com");
        assert!(!claims.verified);
        assert_eq!(claims.role, Role::Customer);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = keys();
        // issued far enough in the past that even validation leeway is spent
        let issued = Utc::now() - Duration::hours(25);
        let token = keys
            .issue(7, "diner@example.com", true, Role::Customer, issued)
            .unwrap();

        assert!(keys.decode(&token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let keys = keys();
        let token = keys
            .issue(7, "diner@example.com", true, Role::Vendor, Utc::now())
            .unwrap();

        let other = JwtKeys::new(&SecretString::from("fedcba9876543210fedcba9876543210"), 24);
        assert!(other.decode(&token).is_err());
    }
}
