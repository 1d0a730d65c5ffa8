//! In-memory contact registry.
//!
//! The registry owns an ordered list of validated contacts. It only grows:
//! contacts are appended and never removed, reordered, or deduplicated.

use crate::domain::ValidationPolicy;
use crate::error::{ContactError, ContactResult};
use crate::fixtures::FixtureRow;
use crate::models::{Contact, NewContact};
use tracing::debug;

/// A fixture row that failed validation during [`ContactRegistry::ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based source line of the rejected row
    pub line: usize,
    pub error: ContactError,
}

/// Ordered, duplicate-tolerant collection of contacts.
///
/// Mutation requires `&mut self`. Callers sharing a registry across threads
/// must wrap it in their own lock.
///
/// # Example
///
/// ```
/// use contact_manager::ContactRegistry;
///
/// let mut registry = ContactRegistry::new();
/// registry.add_contact(Some("John"), Some("Doe"), Some("0123456789")).unwrap();
/// assert!(registry.add_contact(None, Some("Doe"), Some("0123456789")).is_err());
///
/// assert_eq!(registry.get_all_contacts().len(), 1);
/// assert_eq!(registry.get_all_contacts()[0].first_name(), "John");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
    policy: ValidationPolicy,
}

impl ContactRegistry {
    /// Create an empty registry that only requires values to be present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry validating under `policy`.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            contacts: Vec::new(),
            policy,
        }
    }

    /// The policy new contacts are validated under.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate the three values and append a new contact.
    ///
    /// Identical contacts are stored as separate entries, so calling this
    /// twice with the same values grows the registry by two.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` if any value is absent, or
    /// blank under [`ValidationPolicy::RejectBlank`]. The registry is left
    /// unchanged.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<()> {
        let contact = Contact::try_new(first_name, last_name, phone_number, self.policy)
            .inspect_err(|e| debug!(field = %e.field(), "Rejected contact: {}", e))?;

        self.push(contact);
        Ok(())
    }

    /// Validate a draft and append it.
    ///
    /// # Errors
    ///
    /// Same as [`ContactRegistry::add_contact`].
    pub fn add(&mut self, draft: &NewContact) -> ContactResult<()> {
        self.add_contact(
            draft.first_name.as_deref(),
            draft.last_name.as_deref(),
            draft.phone_number.as_deref(),
        )
    }

    /// Add every row in order, collecting the ones that fail validation.
    ///
    /// A rejected row does not stop ingestion; the rows after it are still
    /// added.
    pub fn ingest(&mut self, rows: &[FixtureRow]) -> Vec<Rejection> {
        rows.iter()
            .filter_map(|row| {
                self.add(&row.contact).err().map(|error| Rejection {
                    line: row.line,
                    error,
                })
            })
            .collect()
    }

    /// All contacts in insertion order.
    ///
    /// The slice borrows the registry, so it cannot be used to modify the
    /// stored contacts and the registry cannot change while it is held.
    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Number of stored contacts, duplicates included.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact has been added yet.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn push(&mut self, contact: Contact) {
        debug!(size = self.contacts.len() + 1, "Added contact");
        self.contacts.push(contact);
    }
}

impl<'a> IntoIterator for &'a ContactRegistry {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
