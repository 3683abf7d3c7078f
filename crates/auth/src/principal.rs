use serde::{Deserialize, Serialize};

use ordergate_core::UserId;

use crate::Role;

/// An authenticated identity plus its role.
///
/// Derived either from a credential check (token issuance path) or from a
/// verified token (per-request path). Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// True iff the principal holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True iff the principal may act on a resource owned by `owner`:
    /// admins may act on anything, everyone else only on their own resources.
    pub fn owns_or_admin(&self, owner: &UserId) -> bool {
        self.is_admin() || self.user_id == *owner
    }
}
