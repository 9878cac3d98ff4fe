//! Tracing integration for operation outcomes.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! operation-result = { version = "0.1", features = ["tracing"] }
//! ```
use core::fmt::Debug;

use crate::result::Result;
use crate::status::Status;

/// Extension trait that records an outcome as a `tracing` event.
///
/// Successes are emitted at `TRACE` level and failures at `DEBUG` level: a
/// failed outcome is an expected value, not an exceptional condition. The
/// outcome is returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use operation_result::trace::TraceOutcome;
///
/// fn load_user(id: u64) -> Result<User, LoadError> {
///     repository.find(id).trace_outcome("load_user")
/// }
/// ```
pub trait TraceOutcome: Sized {
    /// Emits an event describing this outcome for `operation`.
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T, E: Debug> TraceOutcome for Result<T, E> {
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Result::Success(_) => tracing::trace!(operation, "operation succeeded"),
            Result::Failure(error) => tracing::debug!(operation, ?error, "operation failed"),
        }
        self
    }
}

impl<E: Debug> TraceOutcome for Status<E> {
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Status::Success => tracing::trace!(operation, "operation succeeded"),
            Status::Failure(error) => tracing::debug!(operation, ?error, "operation failed"),
        }
        self
    }
}
