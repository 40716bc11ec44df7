use async_trait::async_trait;
use contact_registry::domain::ContactId;
use contact_registry::error::{RegistryError, RegistryResult};
use contact_registry::models::{Contact, ContactDraft, ContactFilter};
use contact_registry::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in insertion order, like a collection without a sort,
/// assigns ObjectId-shaped hex ids, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<AtomicU64>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Snapshot of the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every subsequent call fail like a lost connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> RegistryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RegistryError::Store("connection refused".to_string()));
        }
        Ok(())
    }

    fn next_id(&self) -> ContactId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        ContactId::new(format!("{:024x}", n)).unwrap()
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self, filter: &ContactFilter) -> RegistryResult<Vec<Contact>> {
        self.track_call("list")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn get(&self, id: &ContactId) -> RegistryResult<Option<Contact>> {
        self.track_call("get")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| &c.id == id).cloned())
    }

    async fn create(&self, draft: &ContactDraft) -> RegistryResult<Contact> {
        self.track_call("create")?;

        let contact = Contact::from_draft(self.next_id(), draft.clone());
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn replace(&self, id: &ContactId, draft: &ContactDraft) -> RegistryResult<bool> {
        self.track_call("replace")?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| &c.id == id) {
            Some(existing) => {
                *existing = Contact::from_draft(id.clone(), draft.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ContactId) -> RegistryResult<bool> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);
        Ok(contacts.len() < before)
    }

    async fn cities(&self) -> RegistryResult<Vec<String>> {
        self.track_call("cities")?;

        let contacts = self.contacts.lock().unwrap();
        let mut cities: Vec<String> = contacts
            .iter()
            .filter_map(|c| c.city.clone())
            .filter(|c| !c.trim().is_empty())
            .collect();
        cities.sort();
        cities.dedup();
        Ok(cities)
    }
}
