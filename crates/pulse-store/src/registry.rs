//! In-memory user registry.

use dashmap::DashMap;
use tracing::debug;

use pulse_core::types::UserId;
use pulse_entity::user::User;

/// Maps user identifiers to display names; the source of "does this user
/// exist" truth.
///
/// Registration is idempotent-overwrite: re-registering an id replaces
/// the stored name. There is no delete operation.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: DashMap<UserId, User>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or overwrite) the id → name mapping. Always succeeds.
    pub fn register(&self, id: UserId, name: impl Into<String>) -> bool {
        let user = User::new(id.clone(), name);
        let replaced = self.users.insert(id, user).is_some();
        debug!(replaced, "user registered");
        true
    }

    /// Look up a user by id.
    pub fn get(&self, id: &UserId) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    /// Whether the id has been registered.
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    /// Ids of all registered users, in no particular order.
    pub fn user_ids(&self) -> Vec<UserId> {
        self.users.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
