//! Core types for the state store.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value `ContactId::random` can produce (inclusive).
pub const CONTACT_ID_MAX: u64 = 100_000_000;

/// Unique identifier for a contact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl ContactId {
    /// Draw a fresh id, uniform in `[0, CONTACT_ID_MAX]`.
    ///
    /// Ids are not checked against existing contacts; collisions are
    /// possible within a list.
    pub fn random() -> Self {
        ContactId(rand::rng().random_range(0..=CONTACT_ID_MAX))
    }
}

impl fmt::Debug for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactId({})", self.0)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single contact in the application state.
///
/// Contacts are immutable once created; no event mutates or deletes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier (assigned by the store).
    pub id: ContactId,

    /// Display name.
    pub name: String,

    /// Avatar image URI.
    pub image_url: String,

    /// Email address.
    pub email: String,

    /// Phone number.
    pub phone_number: String,
}

/// Input for creating a new contact (before an id is assigned).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub phone_number: String,
}

impl ContactInput {
    /// Create a new contact input.
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Complete the input into a contact with the given id.
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            image_url: self.image_url,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// The root application state.
///
/// The store owns this exclusively and exposes it to listeners by
/// reference; callers must not rely on receiving a defensive copy.
/// `Clone` and `PartialEq` are the structural deep-copy and deep-equality
/// primitives the store's change detection is built on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationState {
    /// Contacts in insertion order.
    pub contact_list: Vec<Contact>,
}

impl ApplicationState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding the given contacts, in order.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contact_list: contacts,
        }
    }

    /// The well-known initial state: two pre-populated contacts.
    pub fn seeded() -> Self {
        Self::with_contacts(vec![
            Contact {
                id: ContactId(70_219_577),
                name: "Albert Einstein".to_string(),
                image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d3/Albert_Einstein_Head.jpg/220px-Albert_Einstein_Head.jpg".to_string(),
                email: "aeinstein@example.com".to_string(),
                phone_number: "707-555-5555".to_string(),
            },
            Contact {
                id: ContactId(70_219_534),
                name: "Benas Benesky".to_string(),
                image_url: "https://vignette.wikia.nocookie.net/mrbean/images/4/4b/Mr_beans_holiday_ver2.jpg/revision/latest/scale-to-width-down/310?cb=20181130033425".to_string(),
                email: "benas@example.com".to_string(),
                phone_number: "030-203-20303".to_string(),
            },
        ])
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contact_list.len()
    }

    /// Whether the contact list is empty.
    pub fn is_empty(&self) -> bool {
        self.contact_list.is_empty()
    }

    /// Contact at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contact_list.get(index)
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contact_list.iter()
    }
}
