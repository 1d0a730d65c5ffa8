//! Contact model representing a person in the registry.

use crate::domain::{ContactField, ValidationPolicy};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated contact.
///
/// Fields are private and only readable through accessors, so a contact
/// cannot change after it has been created. Every field is guaranteed to be
/// present; whether it may be empty depends on the [`ValidationPolicy`] it
/// was validated under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewContact")]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    /// Create a contact from three supplied values.
    ///
    /// All values are present, so this cannot fail under
    /// [`ValidationPolicy::PresenceOnly`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Create a contact from optional values, validating each one.
    ///
    /// Fields are checked in the order first name, last name, phone number
    /// and the first violation is returned.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` if any value is absent, or
    /// blank under [`ValidationPolicy::RejectBlank`].
    pub fn try_new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
        policy: ValidationPolicy,
    ) -> ContactResult<Self> {
        let first_name = policy.check(ContactField::FirstName, first_name)?;
        let last_name = policy.check(ContactField::LastName, last_name)?;
        let phone_number = policy.check(ContactField::PhoneNumber, phone_number)?;

        Ok(Self::new(first_name, last_name, phone_number))
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number, exactly as supplied.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether this contact carries exactly the given values.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.phone_number)
    }
}

/// An unvalidated contact as supplied by a caller or a fixture source.
///
/// `None` marks an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Create a draft with every value present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
        }
    }

    /// Validate the draft under `policy`, producing a [`Contact`].
    ///
    /// # Errors
    ///
    /// See [`Contact::try_new`].
    pub fn validate(&self, policy: ValidationPolicy) -> ContactResult<Contact> {
        Contact::try_new(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.phone_number.as_deref(),
            policy,
        )
    }
}

impl TryFrom<NewContact> for Contact {
    type Error = ContactError;

    fn try_from(draft: NewContact) -> Result<Self, Self::Error> {
        draft.validate(ValidationPolicy::PresenceOnly)
    }
}

impl From<&Contact> for NewContact {
    fn from(contact: &Contact) -> Self {
        Self::new(
            contact.first_name.clone(),
            contact.last_name.clone(),
            contact.phone_number.clone(),
        )
    }
}
