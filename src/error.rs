//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactField, FieldViolation};
use thiserror::Error;

/// Errors raised when a contact is rejected at insertion time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was absent, or blank under a strict policy
    #[error("Invalid argument: {field} {violation}")]
    InvalidArgument {
        field: ContactField,
        violation: FieldViolation,
    },
}

impl ContactError {
    /// The field that failed validation.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidArgument { field, .. } => *field,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading delimited contact fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A record did not have exactly three columns
    #[error("Line {line}: expected 3 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    /// A quoted value was never closed
    #[error("Line {line}: unterminated quoted value")]
    UnterminatedQuote { line: usize },

    /// Reading the underlying source failed
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with FixtureError
pub type FixtureResult<T> = Result<T, FixtureError>;
