//! Contact Manager - an in-memory registry of validated contacts.
//!
//! Contacts are validated when they are added and stored in insertion
//! order. Identical contacts are kept as separate entries, and the registry
//! never shrinks.
//!
//! # Architecture
//!
//! - **domain**: Field names and the validation policy
//! - **models**: The validated `Contact` and the unvalidated `NewContact` draft
//! - **registry**: The `ContactRegistry` collection
//! - **fixtures**: Delimited text input feeding the registry
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the command-line front end

pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactField, FieldViolation, ValidationPolicy};
pub use error::{ConfigError, ContactError, FixtureError};
pub use fixtures::{parse_delimited, read_delimited, FixtureRow};
pub use models::{Contact, NewContact};
pub use registry::{ContactRegistry, Rejection};
