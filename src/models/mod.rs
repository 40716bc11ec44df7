//! Data models for the contact registry.
//!
//! This module contains the stored contact record, the form input it is
//! built from, and the listing filter.

pub mod contact;
pub mod filter;

pub use contact::{Contact, ContactDraft, ContactFields, FIELD_HEADERS, GENDER_OPTIONS};
pub use filter::{ContactFilter, ListParams, ALL};
