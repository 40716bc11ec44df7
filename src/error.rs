//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while serving a registry operation.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A submitted field failed its validation rule; nothing was written
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact matches the given identifier
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The document store rejected or failed the request
    #[error("Store error: {0}")]
    Store(String),

    /// The spreadsheet could not be built
    #[error("Export failed: {0}")]
    Export(String),

    /// A page template failed to render
    #[error("Render failed: {0}")]
    Render(String),
}

impl From<mongodb::error::Error> for RegistryError {
    fn from(err: mongodb::error::Error) -> Self {
        RegistryError::Store(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for RegistryError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        RegistryError::Export(err.to_string())
    }
}

impl From<askama::Error> for RegistryError {
    fn from(err: askama::Error) -> Self {
        RegistryError::Render(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
