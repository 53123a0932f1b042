//! Driving port for user lookups.
//!
//! HTTP handlers depend on this trait rather than on the concrete store, so
//! they can be exercised with a mock and the store can be swapped without
//! touching the handler layer.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user query adapters.
    pub enum UserQueryError {
        /// The backing store could not serve the read.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Domain use-case port for resolving a user by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the user whose identifier matches `id` exactly, if any.
    ///
    /// Absence is `Ok(None)`, never an error.
    async fn find_user(&self, id: &str) -> Result<Option<User>, UserQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unavailable_error_formats_message() {
        let err = UserQueryError::unavailable("lock poisoned");
        assert_eq!(err.to_string(), "user store unavailable: lock poisoned");
    }

    #[rstest]
    #[tokio::test]
    async fn mock_returns_configured_user() {
        let mut query = MockUsersQuery::new();
        query
            .expect_find_user()
            .withf(|id| id == "7")
            .times(1)
            .returning(|id| Ok(Some(User::new(id, "seven@example.com", "Seven"))));

        let user = query.find_user("7").await.expect("query succeeds");
        assert_eq!(user.map(|u| u.name().to_owned()), Some("Seven".to_owned()));
    }
}
