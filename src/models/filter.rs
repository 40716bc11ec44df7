//! Listing filter built from the `/` query string.

use super::Contact;
use serde::Deserialize;

/// Dropdown value meaning "no constraint".
pub const ALL: &str = "All";

/// Query parameters accepted by the listing page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// A normalised listing filter.
///
/// `None` means the dimension is unconstrained: absent, empty and "All"
/// values all collapse to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive substring matched against name, email and phone
    pub search: Option<String>,
    /// Exact gender match
    pub gender: Option<String>,
    /// Exact city match
    pub city: Option<String>,
}

impl ContactFilter {
    pub fn new(search: Option<String>, gender: Option<String>, city: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            gender: choice(gender),
            city: choice(city),
        }
    }

    /// Evaluate the filter against a contact in memory.
    ///
    /// Store implementations that can push the filter down should produce the
    /// same result set as this.
    pub fn matches(&self, contact: &Contact) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let hit = [&contact.name, &contact.email, &contact.phone]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if let Some(ref gender) = self.gender {
            if contact.gender.as_deref() != Some(gender.as_str()) {
                return false;
            }
        }

        if let Some(ref city) = self.city {
            if contact.city.as_deref() != Some(city.as_str()) {
                return false;
            }
        }

        true
    }
}

impl From<ListParams> for ContactFilter {
    fn from(params: ListParams) -> Self {
        ContactFilter::new(params.search, params.gender, params.city)
    }
}

fn choice(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != ALL)
}
