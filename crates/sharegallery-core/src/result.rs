//! Convenience result type alias for Share Gallery.

use crate::error::AppError;

/// A specialized `Result` type for Share Gallery operations.
pub type AppResult<T> = Result<T, AppError>;
