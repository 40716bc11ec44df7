//! Page templates.
//!
//! Template structs carry plain, pre-formatted strings so the templates stay
//! free of logic beyond loops and flags. Askama escapes every interpolation.

use crate::models::{Contact, ContactFields, ContactFilter, ALL, GENDER_OPTIONS};
use askama::Template;

/// One `<option>` of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: &str, label: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected,
        }
    }
}

/// A contact as shown in the listing table.
#[derive(Debug, Clone)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub city: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            gender: contact.gender.clone().unwrap_or_default(),
            city: contact.city.clone().unwrap_or_default(),
        }
    }
}

/// The listing page at `/`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub contacts: Vec<ContactRow>,
    pub search: String,
    pub gender_options: Vec<SelectOption>,
    pub city_options: Vec<SelectOption>,
}

impl IndexTemplate {
    /// Build the page for `contacts`, keeping the active filter selected.
    ///
    /// A city filter that is not among `cities` (typed into the URL) is
    /// still offered so the dropdown reflects what was applied.
    pub fn new(contacts: &[Contact], filter: &ContactFilter, mut cities: Vec<String>) -> Self {
        if let Some(ref city) = filter.city {
            if !cities.contains(city) {
                cities.push(city.clone());
            }
        }

        Self {
            contacts: contacts.iter().map(ContactRow::from).collect(),
            search: filter.search.clone().unwrap_or_default(),
            gender_options: filter_options(GENDER_OPTIONS.iter().copied(), filter.gender.as_deref()),
            city_options: filter_options(cities.iter().map(String::as_str), filter.city.as_deref()),
        }
    }
}

/// The add/edit form.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub fields: ContactFields,
    pub gender_options: Vec<SelectOption>,
}

impl FormTemplate {
    /// Empty form posting to `/add`.
    pub fn add() -> Self {
        Self::build("Add Contact", "/add".to_string(), "Add", ContactFields::default())
    }

    /// Form pre-filled with `contact`, posting back to its edit URL.
    pub fn edit(contact: &Contact) -> Self {
        Self::build(
            "Edit Contact",
            format!("/edit/{}", contact.id),
            "Update",
            ContactFields::from_contact(contact),
        )
    }

    fn build(heading: &str, action: String, submit_label: &str, fields: ContactFields) -> Self {
        let mut gender_options = vec![SelectOption::new("", "Select gender", fields.gender.is_empty())];
        gender_options.extend(
            GENDER_OPTIONS
                .iter()
                .map(|g| SelectOption::new(g, g, fields.gender == *g)),
        );

        // A stored value outside the offered choices must survive an edit
        if !fields.gender.is_empty() && !GENDER_OPTIONS.contains(&fields.gender.as_str()) {
            gender_options.push(SelectOption::new(&fields.gender, &fields.gender, true));
        }

        Self {
            heading: heading.to_string(),
            action,
            submit_label: submit_label.to_string(),
            fields,
            gender_options,
        }
    }
}

/// "All" followed by each value, with the active one selected.
fn filter_options<'a>(
    values: impl Iterator<Item = &'a str>,
    active: Option<&str>,
) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new(ALL, ALL, active.is_none())];
    options.extend(values.map(|v| SelectOption::new(v, v, active == Some(v))));
    options
}
