//! Contact service layer.
//!
//! The five registry operations: list, create, update, delete and export.
//! Every write goes through `ContactDraft::validate` first, so create and
//! edit apply identical field rules and nothing reaches the store on a
//! validation failure.

use crate::domain::ContactId;
use crate::error::{RegistryError, RegistryResult};
use crate::export::build_contacts_workbook;
use crate::models::{Contact, ContactDraft, ContactFields, ContactFilter};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// List the contacts matching `filter`.
    async fn list_contacts(&self, filter: &ContactFilter) -> RegistryResult<Vec<Contact>>;

    /// Known city values for the listing filter.
    async fn list_cities(&self) -> RegistryResult<Vec<String>>;

    /// Fetch one contact for the edit form.
    ///
    /// Returns `RegistryError::NotFound` when the id matches nothing.
    async fn get_contact(&self, id: &str) -> RegistryResult<Contact>;

    /// Validate and insert a new contact.
    async fn create_contact(&self, fields: ContactFields) -> RegistryResult<Contact>;

    /// Validate and replace every field of an existing contact.
    ///
    /// Returns `RegistryError::NotFound` when the id matches nothing.
    async fn update_contact(&self, id: &str, fields: ContactFields) -> RegistryResult<Contact>;

    /// Delete a contact. Deleting a missing contact succeeds.
    async fn delete_contact(&self, id: &str) -> RegistryResult<()>;

    /// Build the `.xlsx` export of every contact.
    async fn export_contacts(&self) -> RegistryResult<Vec<u8>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service over `repository`.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Path ids come straight from the URL; a blank one cannot match.
    fn parse_id(id: &str) -> RegistryResult<ContactId> {
        ContactId::new(id).map_err(|_| RegistryError::NotFound(id.to_string()))
    }

    fn validate(fields: ContactFields) -> RegistryResult<ContactDraft> {
        ContactDraft::validate(fields).map_err(|e| {
            debug!(field = e.field(), "Rejected contact form");
            RegistryError::Validation(e)
        })
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self, filter: &ContactFilter) -> RegistryResult<Vec<Contact>> {
        let contacts = self.repository.list(filter).await?;
        debug!(count = contacts.len(), ?filter, "Listed contacts");
        Ok(contacts)
    }

    async fn list_cities(&self) -> RegistryResult<Vec<String>> {
        self.repository.cities().await
    }

    async fn get_contact(&self, id: &str) -> RegistryResult<Contact> {
        let contact_id = Self::parse_id(id)?;
        self.repository
            .get(&contact_id)
            .await?
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    async fn create_contact(&self, fields: ContactFields) -> RegistryResult<Contact> {
        let draft = Self::validate(fields)?;
        let contact = self.repository.create(&draft).await?;
        info!(id = %contact.id, "Created contact");
        Ok(contact)
    }

    async fn update_contact(&self, id: &str, fields: ContactFields) -> RegistryResult<Contact> {
        let draft = Self::validate(fields)?;
        let contact_id = Self::parse_id(id)?;

        if !self.repository.replace(&contact_id, &draft).await? {
            return Err(RegistryError::NotFound(id.to_string()));
        }

        info!(id = %contact_id, "Updated contact");
        Ok(Contact::from_draft(contact_id, draft))
    }

    async fn delete_contact(&self, id: &str) -> RegistryResult<()> {
        let Ok(contact_id) = ContactId::new(id) else {
            return Ok(());
        };

        if self.repository.delete(&contact_id).await? {
            info!(id = %contact_id, "Deleted contact");
        } else {
            debug!(id = %contact_id, "Delete matched no contact");
        }
        Ok(())
    }

    async fn export_contacts(&self) -> RegistryResult<Vec<u8>> {
        let contacts = self.repository.list(&ContactFilter::default()).await?;
        let workbook = build_contacts_workbook(&contacts)?;
        info!(rows = contacts.len(), bytes = workbook.len(), "Exported contacts");
        Ok(workbook)
    }
}
