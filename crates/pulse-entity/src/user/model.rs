//! User entity model.

use serde::{Deserialize, Serialize};

use pulse_core::types::UserId;

/// A registered user.
///
/// Users are created by registration and never removed. Registering the
/// same id again overwrites the stored display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque caller-supplied identifier (empty string permitted).
    pub id: UserId,
    /// Human-readable display name.
    pub name: String,
}

impl User {
    /// Create a new user record.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
