use crate::domain::ContactId;
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Contact, ContactDraft, ContactFilter};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fields matched by the free-text search term.
const SEARCH_FIELDS: [&str; 3] = ["name", "email", "phone"];

/// Shape of a contact document in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,

    #[serde(default)]
    name: String,

    #[serde(default)]
    email: String,

    #[serde(default)]
    phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
}

impl ContactDocument {
    fn from_draft(draft: &ContactDraft) -> Self {
        Self {
            id: None,
            name: draft.name.as_str().to_string(),
            email: draft.email.as_str().to_string(),
            phone: draft.phone.as_str().to_string(),
            gender: draft.gender.clone(),
            city: draft.city.clone(),
        }
    }

    fn into_contact(self) -> RegistryResult<Contact> {
        let oid = self
            .id
            .ok_or_else(|| RegistryError::Store("document without _id".to_string()))?;
        let id = ContactId::new(oid.to_hex()).map_err(|e| RegistryError::Store(e.to_string()))?;

        Ok(Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            city: self.city,
        })
    }
}

/// Contact repository backed by a MongoDB collection.
///
/// The collection handle is cheap to clone and shares the connection pool of
/// the `Client` it came from; the client's lifecycle belongs to the caller.
pub struct MongoContactRepository {
    collection: Collection<ContactDocument>,
}

impl MongoContactRepository {
    /// Create a repository over `collection` in `database`.
    pub fn new(client: &mongodb::Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
        }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn list(&self, filter: &ContactFilter) -> RegistryResult<Vec<Contact>> {
        let query = filter_document(filter);
        debug!(?query, "Listing contacts");

        let documents: Vec<ContactDocument> =
            self.collection.find(query, None).await?.try_collect().await?;

        documents
            .into_iter()
            .map(ContactDocument::into_contact)
            .collect()
    }

    async fn get(&self, id: &ContactId) -> RegistryResult<Option<Contact>> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": oid }, None)
            .await?
            .map(ContactDocument::into_contact)
            .transpose()
    }

    async fn create(&self, draft: &ContactDraft) -> RegistryResult<Contact> {
        let result = self
            .collection
            .insert_one(ContactDocument::from_draft(draft), None)
            .await?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            RegistryError::Store(format!(
                "store returned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })?;
        let id = ContactId::new(oid.to_hex())?;

        Ok(Contact::from_draft(id, draft.clone()))
    }

    async fn replace(&self, id: &ContactId, draft: &ContactDraft) -> RegistryResult<bool> {
        let Some(oid) = object_id(id) else {
            return Ok(false);
        };

        let result = self
            .collection
            .replace_one(doc! { "_id": oid }, ContactDocument::from_draft(draft), None)
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ContactId) -> RegistryResult<bool> {
        let Some(oid) = object_id(id) else {
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn cities(&self) -> RegistryResult<Vec<String>> {
        let values = self.collection.distinct("city", None, None).await?;

        let mut cities: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(city) if !city.trim().is_empty() => Some(city),
                _ => None,
            })
            .collect();
        cities.sort();
        cities.dedup();

        Ok(cities)
    }
}

/// Ids that are not valid ObjectIds cannot match any document.
fn object_id(id: &ContactId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

/// Translate a listing filter into a MongoDB query document.
///
/// The search term is escaped so it matches literally, and the `i` option
/// makes it case-insensitive.
fn filter_document(filter: &ContactFilter) -> Document {
    let mut query = Document::new();

    if let Some(ref term) = filter.search {
        let pattern = regex::escape(term);
        let any_field: Vec<Document> = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                clause
            })
            .collect();
        query.insert("$or", any_field);
    }

    if let Some(ref gender) = filter.gender {
        query.insert("gender", gender.as_str());
    }

    if let Some(ref city) = filter.city {
        query.insert("city", city.as_str());
    }

    query
}
