//! In-memory user store seeded at process start.
//!
//! The map sits behind a reader-writer lock. Every lookup takes the read
//! guard for the duration of the map access only; the record is cloned out
//! before the guard drops so callers never encode a response while holding
//! it. No writer exists today, but any future mutation must go through the
//! write guard. [`UserStore::get`] never fails and reads through a poisoned
//! lock; the [`UsersQuery`] adapter is stricter and reports
//! [`UserQueryError::Unavailable`] once a writer has panicked.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::User;
use crate::domain::ports::{UserQueryError, UsersQuery};

/// Users compiled into the service.
const SEED_USERS: [(&str, &str, &str); 4] = [
    ("1", "raul@example.com", "Raul Oguns"),
    ("2", "paul@example.com", "Paul Smith"),
    ("3", "john@example.com", "John Smith"),
    ("4", "jane@example.com", "Jane Smith"),
];

/// The fixed seed dataset.
///
/// # Examples
/// ```
/// use backend::domain::seed_users;
///
/// assert_eq!(seed_users().len(), 4);
/// ```
pub fn seed_users() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|(id, email, name)| User::new(*id, *email, *name))
        .collect()
}

/// Process-lifetime mapping from identifier to [`User`].
///
/// ## Invariants
/// - Every key equals the `id` of its value; records are keyed by their own
///   identifier at construction.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Build a store keyed by each record's identifier.
    ///
    /// Later records replace earlier ones sharing an identifier.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id().to_owned(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Build a store over [`seed_users`].
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserStore;
    ///
    /// let store = UserStore::seeded();
    /// assert_eq!(store.get("1").map(|u| u.name().to_owned()), Some("Raul Oguns".into()));
    /// assert!(store.get("5").is_none());
    /// ```
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// Exact-match lookup. Any string is accepted, including the empty one.
    /// Absence is `None`; no error is signalled.
    pub fn get(&self, id: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(id).cloned()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UsersQuery for UserStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>, UserQueryError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserQueryError::unavailable("user map lock poisoned"))?;
        Ok(users.get(id).cloned())
    }
}
