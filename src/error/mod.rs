//! Error types for the quiz client.
//!
//! - [`ApiError`] - a request against the quiz API failed (transport,
//!   HTTP status, malformed or invalid payload)
//! - [`QuizValidationError`] - a quiz payload broke an invariant
//!
//! Controllers map these onto fixed per-flow messages; the detailed error
//! only goes to the log.

mod api;
mod validation;

pub use api::ApiError;
pub use validation::QuizValidationError;

/// Result alias for quiz API operations.
pub type ApiResult<T> = Result<T, ApiError>;
