//! Contact Registry - server-rendered contact management over MongoDB.
//!
//! List, search, add, edit and delete contacts through HTML forms, and
//! export the whole registry as an `.xlsx` workbook.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, email, phone, id)
//! - **models**: Contact record, form input and listing filter
//! - **repositories**: Storage abstraction and its MongoDB implementation
//! - **services**: The registry operations
//! - **export**: Spreadsheet generation
//! - **server**: HTTP routes, handlers and page templates
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, RegistryError};
pub use models::{Contact, ContactDraft, ContactFields, ContactFilter};
pub use repositories::{ContactRepository, MongoContactRepository};
pub use server::AppState;
pub use services::{ContactService, ContactServiceImpl};
