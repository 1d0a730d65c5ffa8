//! Data models for the contact manager.
//!
//! This module contains the validated contact record and the unvalidated
//! draft it is built from.

pub mod contact;

pub use contact::{Contact, NewContact};
