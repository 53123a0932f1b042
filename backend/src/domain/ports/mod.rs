//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod users_query;

#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{UserQueryError, UsersQuery};
