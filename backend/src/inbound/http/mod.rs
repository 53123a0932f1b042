//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod fallback;
pub mod health;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
