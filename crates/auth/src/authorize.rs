//! Per-request authentication: bearer token in, verified principal out.

use std::sync::Arc;

use thiserror::Error;

use crate::{Principal, TokenCodec, TokenError};

/// Why a bearer token was rejected.
///
/// All variants collapse to the same unauthenticated outcome at the API
/// boundary (401 with a bearer challenge); they stay distinct so staleness
/// can be told apart from tampering in diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthnError {
    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token")]
    InvalidToken,

    /// The token decoded structurally but lacks a usable subject.
    #[error("Invalid token payload")]
    InvalidPayload,
}

/// Decodes bearer tokens into principals for resource handlers.
#[derive(Clone)]
pub struct RequestAuthorizer {
    codec: Arc<TokenCodec>,
}

impl RequestAuthorizer {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Verify a bearer token and derive the request principal.
    ///
    /// The decoded claims must carry a non-empty subject and a recognized
    /// role; a token that decodes but lacks either is treated identically to
    /// an invalid token.
    pub fn authenticate_request(&self, bearer_token: &str) -> Result<Principal, AuthnError> {
        let claims = self.codec.verify(bearer_token).map_err(|e| match e {
            TokenError::Expired => AuthnError::ExpiredToken,
            _ => AuthnError::InvalidToken,
        })?;

        if claims.sub.is_empty() {
            return Err(AuthnError::InvalidPayload);
        }

        Ok(Principal::new(claims.sub, claims.role))
    }
}
