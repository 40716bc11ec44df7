//! ContactId value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// The store assigns identifiers; the rest of the application treats them as
/// opaque non-empty strings and never constructs one from scratch.
///
/// # Example
///
/// ```
/// use contact_registry::domain::ContactId;
///
/// let id = ContactId::new("65f1c0a2b3d4e5f601234567").unwrap();
/// assert_eq!(id.as_str(), "65f1c0a2b3d4e5f601234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
