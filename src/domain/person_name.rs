//! PersonName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("name pattern is valid"));

/// A contact's display name: ASCII letters and spaces only, non-empty.
///
/// # Example
///
/// ```
/// use contact_registry::domain::PersonName;
///
/// assert!(PersonName::new("John Doe").is_ok());
/// assert!(PersonName::new("John1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and wrap a name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` unless the whole input matches
    /// `^[A-Za-z ]+$`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !NAME_PATTERN.is_match(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
