//! Domain value objects and types.
//!
//! Each value object owns exactly one validation rule and can only be
//! constructed through it, so a value that exists has already been checked.
//! Create and edit share these constructors through `ContactDraft`.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
