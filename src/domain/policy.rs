//! Field validation policy.

use super::field::{ContactField, FieldViolation};
use crate::error::{ContactError, ContactResult};
use std::fmt;
use std::str::FromStr;

/// How strictly field values are checked before a contact is created.
///
/// The default, [`ValidationPolicy::PresenceOnly`], only requires that each
/// value is supplied. Empty strings are accepted.
///
/// # Example
///
/// ```
/// use contact_manager::domain::{ContactField, ValidationPolicy};
///
/// let lax = ValidationPolicy::PresenceOnly;
/// assert_eq!(lax.check(ContactField::FirstName, Some("")).unwrap(), "");
///
/// let strict = ValidationPolicy::RejectBlank;
/// assert!(strict.check(ContactField::FirstName, Some("  ")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationPolicy {
    /// Accept any supplied value, including the empty string.
    #[default]
    PresenceOnly,

    /// Additionally reject empty and whitespace-only values.
    RejectBlank,
}

impl ValidationPolicy {
    /// Check a single field value, returning it on success.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` naming `field` when the value
    /// is absent, or blank under [`ValidationPolicy::RejectBlank`].
    pub fn check<'a>(&self, field: ContactField, value: Option<&'a str>) -> ContactResult<&'a str> {
        let value = value.ok_or(ContactError::InvalidArgument {
            field,
            violation: FieldViolation::Missing,
        })?;

        if *self == Self::RejectBlank && value.trim().is_empty() {
            return Err(ContactError::InvalidArgument {
                field,
                violation: FieldViolation::Blank,
            });
        }

        Ok(value)
    }

    /// The policy name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PresenceOnly => "presence",
            Self::RejectBlank => "reject-blank",
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" | "presence-only" => Ok(Self::PresenceOnly),
            "reject-blank" | "strict" => Ok(Self::RejectBlank),
            other => Err(format!(
                "Expected 'presence' or 'reject-blank', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
