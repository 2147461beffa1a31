//! Core error types for the ExpenseFlow client.
//!
//! This module defines transport-agnostic error types. HTTP-specific
//! failures (from reqwest) are converted to these types by the connect
//! layer, so domain code never depends on the HTTP stack.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the expense client.
#[derive(Error, Debug)]
pub enum Error {
    /// Network/transport failure before an HTTP status was received.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status returned by the backend.
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Error-flagged or malformed JSON payload.
    #[error("Invalid API payload: {0}")]
    Payload(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Payload(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
