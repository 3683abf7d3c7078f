use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use ordergate_core::UserId;

/// A stored user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// In-memory profile table keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    inner: RwLock<HashMap<UserId, ProfileRecord>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: impl IntoIterator<Item = ProfileRecord>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.inner.write() {
            for record in records {
                map.insert(record.user_id.clone(), record);
            }
        }
        store
    }

    pub fn get(&self, user_id: &UserId) -> Option<ProfileRecord> {
        let map = self.inner.read().ok()?;
        map.get(user_id).cloned()
    }

    /// Apply a partial update; returns the updated record, or `None` if no
    /// profile exists for `user_id`.
    pub fn update(&self, user_id: &UserId, patch: ProfilePatch) -> Option<ProfileRecord> {
        let mut map = self.inner.write().ok()?;
        let record = map.get_mut(user_id)?;

        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(full_name) = patch.full_name {
            record.full_name = full_name;
        }
        if let Some(phone) = patch.phone {
            record.phone = Some(phone);
        }
        if let Some(address) = patch.address {
            record.address = Some(address);
        }

        Some(record.clone())
    }
}
