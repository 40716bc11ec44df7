//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` text of the field variants is exactly what the HTTP layer
/// returns to the browser, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided name contains something other than letters and spaces.
    InvalidName(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl ValidationError {
    /// The form field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId => "id",
            Self::InvalidName(_) => "name",
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phone",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidName(_) => write!(f, "Invalid Name"),
            Self::InvalidEmail(_) => write!(f, "Invalid Email"),
            Self::InvalidPhone(_) => write!(f, "Phone must be 10 digits"),
        }
    }
}

impl std::error::Error for ValidationError {}
