//! `ordergate-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: credential
//! verification, signed-token issuance/validation, and the ownership/role
//! policy all live here as synchronous functions over immutable state.

pub mod authenticate;
pub mod authorize;
pub mod credentials;
pub mod principal;
pub mod roles;
pub mod token;

pub use authenticate::{AuthError, Authenticator, GrantRequest, grant_types};
pub use authorize::{AuthnError, RequestAuthorizer};
pub use credentials::{CredentialStore, ServiceAccountRecord, UserRecord};
pub use principal::Principal;
pub use roles::Role;
pub use token::{AccessClaims, DEFAULT_TOKEN_TTL, TokenCodec, TokenError};
