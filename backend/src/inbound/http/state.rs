//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without standing up a server.

use std::sync::Arc;

use crate::domain::ports::UsersQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state around a users query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::UserStore;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(UserStore::seeded()));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>) -> Self {
        Self { users }
    }
}
