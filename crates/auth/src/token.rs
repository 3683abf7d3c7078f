//! Signed access-token codec (HS256 JWT).
//!
//! A token carries exactly three claims: subject identity, role, and an
//! absolute expiry instant. The signature covers the full claim set, so any
//! bit-level modification to the claims invalidates the token. The codec owns
//! no state beyond the signing keys and the default TTL; tokens themselves are
//! held by callers (no session table, no revocation).

use std::time::Duration;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind, get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ordergate_core::UserId;

use crate::Role;

/// Default token lifetime when the issuer does not specify one.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// The claim set asserted by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject identity.
    pub sub: UserId,
    /// Role granted to the subject.
    pub role: Role,
    /// Expiry instant, seconds since the Unix epoch.
    pub exp: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token's embedded expiry has passed (signature may be valid).
    #[error("token has expired")]
    Expired,

    /// Signature mismatch, structurally invalid encoding, or an unsupported
    /// signing scheme.
    #[error("malformed token")]
    Malformed,

    /// The claim set could not be encoded at issuance.
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// Encodes claim sets into signed tokens and validates them back.
///
/// Keys are derived once from the process-wide signing secret and never
/// rotated within this scope.
pub struct TokenCodec {
    header: Header,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, DEFAULT_TOKEN_TTL)
    }

    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by hand in `verify`: a token is valid strictly
        // before its expiry instant, with zero leeway.
        validation.validate_exp = false;

        Self {
            header: Header::new(Algorithm::HS256),
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Declared lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a signed token for `subject` with the codec's default TTL.
    pub fn issue(&self, subject: &UserId, role: Role) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, role, self.ttl)
    }

    /// Issue a signed token expiring at issue-time + `ttl`.
    pub fn issue_with_ttl(
        &self,
        subject: &UserId,
        role: Role,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = AccessClaims {
            sub: subject.clone(),
            role,
            exp: get_current_timestamp() + ttl.as_secs(),
        };

        encode(&self.header, &claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Validate a token and decode its claim set.
    ///
    /// Signature and structure are checked first; a structurally valid,
    /// correctly signed token whose expiry instant has been reached still
    /// fails, but with [`TokenError::Expired`] so callers can tell staleness
    /// apart from tampering.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let data = decode::<AccessClaims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        if get_current_timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}
