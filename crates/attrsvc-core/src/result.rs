//! Result type aliases for the attribute services.

use crate::AttrError;

/// A specialized `Result` type for attribute service operations.
pub type AttrResult<T> = Result<T, AttrError>;
