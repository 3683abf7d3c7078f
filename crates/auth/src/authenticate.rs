//! Credential-grant exchange: grant in, verified principal out.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use ordergate_core::{ClientId, UserId};

use crate::{CredentialStore, Principal};

/// Grant type tags accepted at the token-issuance boundary.
pub mod grant_types {
    pub const PASSWORD: &str = "password";
    pub const CLIENT_CREDENTIALS: &str = "client_credentials";
}

/// A client-supplied request to exchange a credential for a token.
///
/// The tag is an open string on the wire; the fields for the selected grant
/// variant are required, everything else is ignored. Missing fields are a
/// client error, not an authentication failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantRequest {
    /// Absent on the wire decodes as empty, which lands in the unsupported
    /// branch rather than a deserialization failure.
    #[serde(default)]
    pub grant_type: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
}

impl GrantRequest {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            grant_type: grant_types::PASSWORD.to_string(),
            username: Some(username.into()),
            password: Some(password.into()),
            client_id: None,
            client_secret: None,
        }
    }

    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: grant_types::CLIENT_CREDENTIALS.to_string(),
            username: None,
            password: None,
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Malformed or incomplete grant (client error, not a failed check).
    #[error("{0}")]
    BadRequest(&'static str),

    /// Correct shape, but unknown identity or wrong secret.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unrecognized grant type tag.
    #[error("Unsupported grant type")]
    UnsupportedGrant,
}

/// Exchanges a credential grant for a verified [`Principal`].
///
/// Holds the immutable credential tables; no lockout or rate limiting is
/// applied at this layer.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<CredentialStore>,
}

impl Authenticator {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    pub fn authenticate(&self, grant: &GrantRequest) -> Result<Principal, AuthError> {
        match grant.grant_type.as_str() {
            grant_types::PASSWORD => self.authenticate_password(grant),
            grant_types::CLIENT_CREDENTIALS => self.authenticate_client(grant),
            _ => Err(AuthError::UnsupportedGrant),
        }
    }

    fn authenticate_password(&self, grant: &GrantRequest) -> Result<Principal, AuthError> {
        let (Some(username), Some(password)) = (&grant.username, &grant.password) else {
            return Err(AuthError::BadRequest(
                "Username and password required for password grant",
            ));
        };

        let user_id = UserId::new(username.clone());
        let record = self
            .store
            .lookup_user(&user_id)
            .ok_or(AuthError::InvalidCredentials)?;

        // Plain equality; constant-time comparison is a known hardening gap.
        if record.password != *password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Principal::new(user_id, record.role))
    }

    fn authenticate_client(&self, grant: &GrantRequest) -> Result<Principal, AuthError> {
        let (Some(client_id), Some(client_secret)) = (&grant.client_id, &grant.client_secret)
        else {
            return Err(AuthError::BadRequest(
                "Client ID and secret required for client_credentials grant",
            ));
        };

        let client_id = ClientId::new(client_id.clone());
        let record = self
            .store
            .lookup_service_account(&client_id)
            .ok_or(AuthError::InvalidCredentials)?;

        if record.client_secret != *client_secret {
            return Err(AuthError::InvalidCredentials);
        }

        // The service account authenticates as itself: its client id becomes
        // the principal identity.
        Ok(Principal::new(client_id.as_str(), record.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, ServiceAccountRecord, UserRecord};

    fn authenticator() -> Authenticator {
        let store = CredentialStore::from_records(
            [
                UserRecord::new("user_a", "password_a", Role::User),
                UserRecord::new("user_b", "password_b", Role::User),
                UserRecord::new("admin", "admin_password", Role::Admin),
            ],
            [ServiceAccountRecord::new(
                "service_account",
                "service_secret",
                Role::Admin,
            )],
        );
        Authenticator::new(Arc::new(store))
    }

    #[test]
    fn password_grant_returns_principal_with_store_role() {
        let auth = authenticator();

        let principal = auth
            .authenticate(&GrantRequest::password("user_a", "password_a"))
            .unwrap();
        assert_eq!(principal.user_id, UserId::new("user_a"));
        assert_eq!(principal.role, Role::User);

        let principal = auth
            .authenticate(&GrantRequest::password("admin", "admin_password"))
            .unwrap();
        assert_eq!(principal.role, Role::Admin);
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let auth = authenticator();
        let err = auth
            .authenticate(&GrantRequest::password("user_a", "wrong"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn unknown_username_is_invalid_credentials() {
        let auth = authenticator();
        let err = auth
            .authenticate(&GrantRequest::password("nobody", "password_a"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn client_credentials_grant_authenticates_service_account() {
        let auth = authenticator();
        let principal = auth
            .authenticate(&GrantRequest::client_credentials(
                "service_account",
                "service_secret",
            ))
            .unwrap();
        assert_eq!(principal.user_id, UserId::new("service_account"));
        assert_eq!(principal.role, Role::Admin);
    }

    #[test]
    fn wrong_client_secret_is_invalid_credentials() {
        let auth = authenticator();
        let err = auth
            .authenticate(&GrantRequest::client_credentials("service_account", "nope"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn namespaces_never_cross_authenticate() {
        let auth = authenticator();

        // A user password never succeeds against the client_credentials path.
        let err = auth
            .authenticate(&GrantRequest::client_credentials("user_a", "password_a"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);

        // And a service-account secret never succeeds against the password path.
        let err = auth
            .authenticate(&GrantRequest::password("service_account", "service_secret"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn missing_fields_are_a_bad_request() {
        let auth = authenticator();

        let incomplete = GrantRequest {
            grant_type: grant_types::PASSWORD.to_string(),
            username: Some("user_a".to_string()),
            password: None,
            client_id: None,
            client_secret: None,
        };
        assert!(matches!(
            auth.authenticate(&incomplete),
            Err(AuthError::BadRequest(_))
        ));

        let incomplete = GrantRequest {
            grant_type: grant_types::CLIENT_CREDENTIALS.to_string(),
            username: None,
            password: None,
            client_id: None,
            client_secret: Some("service_secret".to_string()),
        };
        assert!(matches!(
            auth.authenticate(&incomplete),
            Err(AuthError::BadRequest(_))
        ));
    }

    #[test]
    fn unknown_grant_type_is_unsupported() {
        let auth = authenticator();
        let grant = GrantRequest {
            grant_type: "authorization_code".to_string(),
            username: None,
            password: None,
            client_id: None,
            client_secret: None,
        };
        assert_eq!(
            auth.authenticate(&grant).unwrap_err(),
            AuthError::UnsupportedGrant
        );
    }
}
