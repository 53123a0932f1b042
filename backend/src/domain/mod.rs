//! Domain primitives, the user store and its driving port.
//!
//! Purpose: keep the user record, the seeded in-memory store and the error
//! envelope free of HTTP concerns. Inbound adapters depend on
//! [`ports::UsersQuery`] rather than on [`UserStore`] directly.
//!
//! Public surface:
//! - `User`: the `id`/`email`/`name` record.
//! - `UserStore`: read-guarded map seeded at start-up.
//! - `Error` / `ErrorCode`: transport-agnostic error envelope.
//! - `TraceId`: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod store;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, REDACTED_MESSAGE};
pub use self::store::{UserStore, seed_users};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
