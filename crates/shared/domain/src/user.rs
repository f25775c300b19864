//! User domain entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-supplied user identifier. Never generated by the store.
pub type UserId = i64;

/// User domain entity
///
/// The `id` is the storage key and never changes once a record is created;
/// `name` is the only mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Return a copy of this record under the same id with a new name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed_keeps_id() {
        let user = User::new(7, "Иван");
        let renamed = user.renamed("Антон");

        assert_eq!(renamed.id, 7);
        assert_eq!(renamed.name, "Антон");
        assert_eq!(user.name, "Иван");
    }

    #[test]
    fn test_display_includes_name_and_id() {
        let user = User::new(1, "Антон");
        assert_eq!(user.to_string(), "Антон [1]");
    }
}
