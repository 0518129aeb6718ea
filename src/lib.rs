//! # State Store
//!
//! A minimal in-memory state container: it owns one application state
//! value, applies named events to mutate it, and notifies a single
//! registered listener when a mutation actually changed observable state.
//!
//! ## Core Concepts
//!
//! - **State**: one owned [`ApplicationState`] value, live for the process
//!   duration, exposed to the listener by reference
//! - **Events**: a closed [`Event`] enum applied synchronously, in place
//! - **Change detection**: structural checkpoint before dispatch, deep
//!   equality after; the listener fires only on an observable difference
//!
//! ## Example
//!
//! ```
//! use state_store::{ApplicationState, ContactInput, Event, StateStore};
//!
//! let mut store = StateStore::new(ApplicationState::seeded());
//!
//! store.on_update(|state| println!("{} contacts", state.len()));
//! store.force_update();
//!
//! store.send(Event::AddNewContact(ContactInput::new(
//!     "Ada Lovelace",
//!     "https://example.com/ada.png",
//!     "ada@example.com",
//!     "1",
//! )))?;
//! # Ok::<(), state_store::StoreError>(())
//! ```

pub mod error;
pub mod events;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use events::{Event, ADD_NEW_CONTACT};
pub use store::{StateStore, UpdateCallback};
pub use types::{ApplicationState, Contact, ContactId, ContactInput, CONTACT_ID_MAX};
