//! Event parsing and dispatch.

use crate::error::{Result, StoreError};
use crate::types::{ApplicationState, ContactId, ContactInput};
use serde_json::Value;

/// Name of the add-new-contact event on the string interface.
pub const ADD_NEW_CONTACT: &str = "addNewContact";

/// A state-mutating event.
///
/// Closed enum over the known event kinds. Unknown names fail at parse
/// time, so a dispatched event either fully happens or not at all.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Append a new contact with a freshly generated id.
    AddNewContact(ContactInput),
}

impl Event {
    /// Parse a `(name, payload)` pair from the string interface into a
    /// typed event.
    ///
    /// The payload must deserialize to the shape the named event requires;
    /// a malformed or missing payload is rejected here, before any state
    /// is touched.
    pub fn parse(name: &str, data: Option<Value>) -> Result<Self> {
        match name {
            ADD_NEW_CONTACT => {
                let payload = data.ok_or(StoreError::MissingPayload(ADD_NEW_CONTACT))?;
                let input: ContactInput =
                    serde_json::from_value(payload).map_err(|source| {
                        StoreError::InvalidPayload {
                            event: ADD_NEW_CONTACT,
                            source,
                        }
                    })?;
                Ok(Event::AddNewContact(input))
            }
            other => Err(StoreError::UnrecognizedEvent(other.to_string())),
        }
    }

    /// The event's name on the string interface.
    pub fn name(&self) -> &'static str {
        match self {
            Event::AddNewContact(_) => ADD_NEW_CONTACT,
        }
    }
}

/// Apply an event to the live state, mutating it in place.
pub(crate) fn handle_event(event: Event, state: &mut ApplicationState) {
    match event {
        Event::AddNewContact(input) => {
            let contact = input.into_contact(ContactId::random());
            state.contact_list.push(contact);
        }
    }
}
