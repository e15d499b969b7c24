//! Error handling module for the GearGuard core.
//!
//! Little here is fallible: mutators log and swallow persistence failures,
//! and unknown-id lookups are silent no-ops. What remains is form-boundary
//! validation and adapter failures during load.

use thiserror::Error;

use crate::storage::StorageError;

/// Application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required form field is missing or malformed; surfaced inline at the
    /// form boundary, never stored.
    #[error("validation error: {0}")]
    Validation(String),

    /// The storage adapter failed outright (I/O, encoding).
    #[error(transparent)]
    Storage(#[from] StorageError),
}
