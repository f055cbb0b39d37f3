//! Error types for the PagHiper API.

use serde::{Deserialize, Serialize};

/// Local validation failures, raised before any request leaves the process.
///
/// Each variant names the field that failed so callers can point the user
/// at the right input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} is invalid")]
    Invalid(&'static str),

    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),

    #[error("at least one item is required")]
    NoItems,
}

impl ValidationError {
    /// Returns the name of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::Required(f)
            | ValidationError::Invalid(f)
            | ValidationError::NonPositive(f) => Some(f),
            ValidationError::NoItems => None,
        }
    }
}

/// A rejection returned by the PagHiper API.
///
/// This is an expected outcome of a call (the provider answered, but said
/// no), not a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("PagHiper rejected the request ({http_code}): {response_message}")]
pub struct PagHiperError {
    /// Readable message returned by the API.
    pub response_message: String,
    /// HTTP status code of the response.
    pub http_code: u16,
}

/// Outcome of a call the provider answered: either the decoded payload or
/// the provider's rejection.
pub type ApiResult<T> = Result<T, PagHiperError>;
