//! Per-request correlation identifier.
//!
//! The trace middleware generates one [`TraceId`] per request and runs the
//! downstream service inside its task-local scope. Handlers, errors and log
//! events read it back with [`TraceId::current`]; work spawned onto other
//! tasks does not inherit it.

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Random v4 UUID identifying one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    ///
    /// # Examples
    /// ```
    /// use backend::TraceId;
    ///
    /// // Outside a traced request there is nothing to report.
    /// assert!(TraceId::current().is_none());
    /// ```
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `self` as the current identifier.
    pub(crate) async fn in_scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0.as_hyphenated(), f)
    }
}
