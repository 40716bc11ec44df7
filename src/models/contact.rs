//! Contact model: the stored record, the raw form input and the validated draft.

use crate::domain::{ContactId, EmailAddress, PersonName, PhoneNumber, ValidationError};
use serde::Deserialize;

/// Gender choices offered by the add/edit form.
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Column headers of the export, in field order.
pub const FIELD_HEADERS: [&str; 5] = ["Name", "Email", "Phone", "Gender", "City"];

/// A contact as stored in the registry.
///
/// Name, email and phone were validated when written through this
/// application; gender and city are free text and may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: ContactId,

    pub name: String,
    pub email: String,
    pub phone: String,

    pub gender: Option<String>,
    pub city: Option<String>,
}

impl Contact {
    /// Build the stored record from a validated draft and the id the store
    /// assigned to it.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name.into_inner(),
            email: draft.email.into_inner(),
            phone: draft.phone.into_inner(),
            gender: draft.gender,
            city: draft.city,
        }
    }

    /// Field values in export column order; absent optional fields are `None`.
    pub fn row(&self) -> [Option<&str>; 5] {
        [
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.phone.as_str()),
            self.gender.as_deref(),
            self.city.as_deref(),
        ]
    }
}

/// Raw add/edit form submission.
///
/// Every field defaults to empty so that a missing field fails its
/// validation rule instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub city: String,
}

impl ContactFields {
    /// Pre-fill a form from an existing contact.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            gender: contact.gender.clone().unwrap_or_default(),
            city: contact.city.clone().unwrap_or_default(),
        }
    }
}

/// A validated set of contact fields, ready to be inserted or to replace an
/// existing contact wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub gender: Option<String>,
    pub city: Option<String>,
}

impl ContactDraft {
    /// Apply the field rules in order: name, email, phone.
    ///
    /// Stops at the first failure. Blank gender/city become `None`.
    pub fn validate(fields: ContactFields) -> Result<Self, ValidationError> {
        let name = PersonName::new(fields.name)?;
        let email = EmailAddress::new(fields.email)?;
        let phone = PhoneNumber::new(fields.phone)?;

        Ok(Self {
            name,
            email,
            phone,
            gender: non_blank(fields.gender),
            city: non_blank(fields.city),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
