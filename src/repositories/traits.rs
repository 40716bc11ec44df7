use crate::domain::ContactId;
use crate::error::RegistryResult;
use crate::models::{Contact, ContactDraft, ContactFilter};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (MongoDB, in-memory mock). Each method maps to
/// a single store call.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve the contacts matching `filter`, in store-native order.
    async fn list(&self, filter: &ContactFilter) -> RegistryResult<Vec<Contact>>;

    /// Retrieve a single contact by ID, `None` if nothing matches.
    async fn get(&self, id: &ContactId) -> RegistryResult<Option<Contact>>;

    /// Insert a new contact; the store assigns its ID.
    async fn create(&self, draft: &ContactDraft) -> RegistryResult<Contact>;

    /// Replace every field of the contact with `id`.
    ///
    /// Returns `false` when no contact matched.
    async fn replace(&self, id: &ContactId, draft: &ContactDraft) -> RegistryResult<bool>;

    /// Delete the contact with `id`.
    ///
    /// Returns `false` when no contact matched; that is not an error.
    async fn delete(&self, id: &ContactId) -> RegistryResult<bool>;

    /// Distinct non-empty city values, sorted.
    async fn cities(&self) -> RegistryResult<Vec<String>>;
}
