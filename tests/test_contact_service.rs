//! Contact service behaviour against the in-memory repository.

mod mocks;

use contact_registry::error::RegistryError;
use contact_registry::models::{ContactFields, ContactFilter};
use contact_registry::services::{ContactService, ContactServiceImpl};
use mocks::MockContactRepository;
use std::sync::Arc;

fn setup() -> (MockContactRepository, ContactServiceImpl) {
    let repo = MockContactRepository::new();
    let service = ContactServiceImpl::new(Arc::new(repo.clone()));
    (repo, service)
}

fn fields(name: &str, email: &str, phone: &str) -> ContactFields {
    ContactFields {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        ..Default::default()
    }
}

fn full_fields(name: &str, email: &str, phone: &str, gender: &str, city: &str) -> ContactFields {
    ContactFields {
        gender: gender.to_string(),
        city: city.to_string(),
        ..fields(name, email, phone)
    }
}

#[tokio::test]
async fn test_create_then_list() {
    let (_repo, service) = setup();

    let created = service
        .create_contact(fields("John Doe", "john@x.com", "1234567890"))
        .await
        .unwrap();

    let listed = service.list_contacts(&ContactFilter::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].name, "John Doe");
    assert_eq!(listed[0].email, "john@x.com");
    assert_eq!(listed[0].phone, "1234567890");
    assert_eq!(listed[0].gender, None);
    assert_eq!(listed[0].city, None);
}

#[tokio::test]
async fn test_create_rejects_each_rule_without_writing() {
    let (repo, service) = setup();

    let cases = [
        (fields("John1", "john@x.com", "1234567890"), "Invalid Name"),
        (fields("", "john@x.com", "1234567890"), "Invalid Name"),
        (fields("John", "john.x.com", "1234567890"), "Invalid Email"),
        (fields("John", "john@xcom", "1234567890"), "Invalid Email"),
        (fields("John", "john@x.com", "123456789"), "Phone must be 10 digits"),
        (fields("John", "john@x.com", "12345abcde"), "Phone must be 10 digits"),
    ];

    for (input, expected) in cases {
        let err = service.create_contact(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert_eq!(err.to_string(), expected);
    }

    assert!(repo.contacts().is_empty());
    assert_eq!(repo.get_call_count("create"), 0);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let (repo, service) = setup();
    let created = service
        .create_contact(full_fields("Ann", "ann@x.com", "1112223333", "Female", "Pune"))
        .await
        .unwrap();

    service
        .update_contact(created.id.as_str(), fields("Ann Lee", "ann@y.org", "9998887777"))
        .await
        .unwrap();

    let stored = repo.contacts();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created.id);
    assert_eq!(stored[0].name, "Ann Lee");
    assert_eq!(stored[0].email, "ann@y.org");
    assert_eq!(stored[0].phone, "9998887777");
    // Full replacement: omitted optional fields are cleared, not merged
    assert_eq!(stored[0].gender, None);
    assert_eq!(stored[0].city, None);
}

#[tokio::test]
async fn test_update_validation_failure_leaves_store_unchanged() {
    let (repo, service) = setup();
    let created = service
        .create_contact(fields("Ann", "ann@x.com", "1112223333"))
        .await
        .unwrap();
    let before = repo.contacts();

    let err = service
        .update_contact(created.id.as_str(), fields("Ann", "ann@x.com", "111"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Phone must be 10 digits");
    assert_eq!(repo.contacts(), before);
    assert_eq!(repo.get_call_count("replace"), 0);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (repo, service) = setup();

    let err = service
        .update_contact("ffffffffffffffffffffffff", fields("Ann", "ann@x.com", "1112223333"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::NotFound(_)));
    assert!(repo.contacts().is_empty());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let (_repo, service) = setup();

    let err = service.get_contact("ffffffffffffffffffffffff").await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));

    let err = service.get_contact("").await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (repo, service) = setup();
    let created = service
        .create_contact(fields("Ann", "ann@x.com", "1112223333"))
        .await
        .unwrap();

    service.delete_contact(created.id.as_str()).await.unwrap();
    assert!(repo.contacts().is_empty());

    service.delete_contact(created.id.as_str()).await.unwrap();
    service.delete_contact("").await.unwrap();
    assert_eq!(repo.get_call_count("delete"), 2);
}

#[tokio::test]
async fn test_list_filters() {
    let (_repo, service) = setup();
    for input in [
        full_fields("Alice", "Alice@Example.com", "1111111111", "Female", "Pune"),
        full_fields("Bob", "bob@mail.org", "2222222222", "Male", "Delhi"),
        full_fields("Carol", "carol@example.net", "3333333333", "Female", "Delhi"),
    ] {
        service.create_contact(input).await.unwrap();
    }

    let names = |contacts: Vec<contact_registry::Contact>| -> Vec<String> {
        contacts.into_iter().map(|c| c.name).collect()
    };

    let by_search = ContactFilter::new(Some("example".into()), None, None);
    assert_eq!(
        names(service.list_contacts(&by_search).await.unwrap()),
        vec!["Alice", "Carol"]
    );

    let by_gender = ContactFilter::new(None, Some("Female".into()), Some("All".into()));
    assert_eq!(
        names(service.list_contacts(&by_gender).await.unwrap()),
        vec!["Alice", "Carol"]
    );

    let combined = ContactFilter::new(Some("e".into()), Some("Female".into()), Some("Delhi".into()));
    assert_eq!(
        names(service.list_contacts(&combined).await.unwrap()),
        vec!["Carol"]
    );

    let everything = ContactFilter::new(None, Some("All".into()), Some("All".into()));
    assert_eq!(service.list_contacts(&everything).await.unwrap().len(), 3);

    assert_eq!(
        service.list_cities().await.unwrap(),
        vec!["Delhi".to_string(), "Pune".to_string()]
    );
}

#[tokio::test]
async fn test_export_reads_every_contact() {
    let (repo, service) = setup();
    service
        .create_contact(full_fields("Alice", "alice@x.com", "1111111111", "Female", "Pune"))
        .await
        .unwrap();

    let bytes = service.export_contacts().await.unwrap();
    // Office Open XML is a zip container
    assert_eq!(&bytes[..2], b"PK");
    assert_eq!(repo.get_call_count("list"), 1);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let (repo, service) = setup();
    repo.set_unavailable(true);

    let err = service
        .list_contacts(&ContactFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Store(_)));
}
