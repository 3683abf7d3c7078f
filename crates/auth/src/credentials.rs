//! Static credential tables for interactive users and service accounts.
//!
//! The store is built once from configuration records at startup and shared
//! read-only (`Arc`) into the [`Authenticator`](crate::Authenticator). Lookups
//! are pure; secret comparison happens at the authentication boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ordergate_core::{ClientId, UserId};

use crate::Role;

/// Credential record for an interactive user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub password: String,
    pub role: Role,
}

impl UserRecord {
    pub fn new(user_id: impl Into<UserId>, password: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            role,
        }
    }
}

/// Credential record for a service account (client-credentials grant).
///
/// Lives in its own namespace: a client id may spell the same as a user
/// identity without conflict, since the two tables are consulted by
/// different grant paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountRecord {
    pub client_id: ClientId,
    pub client_secret: String,
    pub role: Role,
}

impl ServiceAccountRecord {
    pub fn new(client_id: impl Into<ClientId>, client_secret: impl Into<String>, role: Role) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            role,
        }
    }
}

/// Immutable credential store, loaded once at process start.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<UserId, UserRecord>,
    service_accounts: HashMap<ClientId, ServiceAccountRecord>,
}

impl CredentialStore {
    /// Build the store from configuration records.
    ///
    /// Later records win on duplicate identity within a table; the key space
    /// enforces per-table uniqueness.
    pub fn from_records(
        users: impl IntoIterator<Item = UserRecord>,
        service_accounts: impl IntoIterator<Item = ServiceAccountRecord>,
    ) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|r| (r.user_id.clone(), r))
                .collect(),
            service_accounts: service_accounts
                .into_iter()
                .map(|r| (r.client_id.clone(), r))
                .collect(),
        }
    }

    pub fn lookup_user(&self, user_id: &UserId) -> Option<&UserRecord> {
        self.users.get(user_id)
    }

    pub fn lookup_service_account(&self, client_id: &ClientId) -> Option<&ServiceAccountRecord> {
        self.service_accounts.get(client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        CredentialStore::from_records(
            [
                UserRecord::new("user_a", "password_a", Role::User),
                UserRecord::new("admin", "admin_password", Role::Admin),
            ],
            [ServiceAccountRecord::new(
                "service_account",
                "service_secret",
                Role::Admin,
            )],
        )
    }

    #[test]
    fn lookup_user_finds_known_identity() {
        let store = store();
        let record = store.lookup_user(&UserId::new("user_a")).unwrap();
        assert_eq!(record.role, Role::User);
        assert_eq!(record.password, "password_a");
    }

    #[test]
    fn lookup_user_misses_unknown_identity() {
        let store = store();
        assert!(store.lookup_user(&UserId::new("nobody")).is_none());
    }

    #[test]
    fn namespaces_are_independent() {
        let store = store();
        // "service_account" exists only in the service-account table.
        assert!(store.lookup_user(&UserId::new("service_account")).is_none());
        assert!(
            store
                .lookup_service_account(&ClientId::new("service_account"))
                .is_some()
        );
        // And interactive users are invisible to the client-credentials path.
        assert!(store.lookup_service_account(&ClientId::new("user_a")).is_none());
    }
}
