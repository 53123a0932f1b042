//! User record served by the lookup endpoint.

use serde::{Deserialize, Serialize};

/// Application user.
///
/// Serialises to exactly `id`, `email` and `name`, in that order. The
/// identifier is any string; the store performs exact matching only.
///
/// # Examples
/// ```
/// use backend::domain::User;
///
/// let user = User::new("1", "raul@example.com", "Raul Oguns");
/// assert_eq!(user.id(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: String,
    email: String,
    name: String,
}

impl User {
    /// Build a user record from its three fields.
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
