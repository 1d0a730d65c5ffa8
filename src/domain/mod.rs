//! Domain vocabulary for contact validation.
//!
//! This module names the fields a contact carries and the policy used to
//! decide whether a supplied value is acceptable. Validation happens at
//! construction time so that an invalid contact is never represented in
//! the system.

pub mod field;
pub mod policy;

pub use field::{ContactField, FieldViolation};
pub use policy::ValidationPolicy;
