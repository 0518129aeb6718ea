//! The state store: listener slot, event dispatch, change detection.

use crate::error::Result;
use crate::events::{handle_event, Event};
use crate::types::ApplicationState;
use serde_json::Value;
use tracing::{debug, trace};

/// Callback invoked with the live state after an observable change.
pub type UpdateCallback = Box<dyn FnMut(&ApplicationState)>;

/// An in-memory state container with event dispatch and change detection.
///
/// The application constructs one instance at startup with the initial
/// state and keeps it for the process lifetime. The expected wiring for a
/// consumer (e.g. a rendering layer) is:
///
/// 1. [`on_update`](StateStore::on_update) once, to receive future changes.
/// 2. [`force_update`](StateStore::force_update) once, to obtain the
///    initial snapshot.
/// 3. [`send_event`](StateStore::send_event) to request mutations.
///
/// All operations are synchronous and run on the caller's stack. The
/// mutating operations take `&mut self`, so a listener cannot re-enter
/// the store while a dispatch is in flight.
pub struct StateStore {
    /// The live application state. Mutated in place by event dispatch.
    state: ApplicationState,

    /// The single registered change listener, if any. Re-registering
    /// silently replaces the previous one.
    on_update: Option<UpdateCallback>,
}

impl StateStore {
    /// Create a store owning the given initial state.
    pub fn new(initial: ApplicationState) -> Self {
        Self {
            state: initial,
            on_update: None,
        }
    }

    /// The current live state.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Register the change listener, replacing any previously registered
    /// one. At most one listener is retained; there is no unregister
    /// operation.
    pub fn on_update(&mut self, callback: impl FnMut(&ApplicationState) + 'static) {
        trace!(replacing = self.on_update.is_some(), "registering listener");
        self.on_update = Some(Box::new(callback));
    }

    /// Invoke the registered listener with the current live state. No-op
    /// if no listener is registered.
    pub fn force_update(&mut self) {
        if let Some(callback) = self.on_update.as_mut() {
            callback(&self.state);
        }
    }

    /// Dispatch a named event with an optional opaque payload.
    ///
    /// Unknown event names and malformed payloads fail before any state is
    /// touched, so the state is unchanged and no notification is sent.
    pub fn send_event(&mut self, name: &str, data: Option<Value>) -> Result<()> {
        let event = Event::parse(name, data)?;
        self.send(event)
    }

    /// Dispatch a typed event.
    ///
    /// The store checkpoints the state, applies the event's mutation to
    /// the live state, and notifies the listener if and only if the
    /// resulting state differs structurally from the checkpoint. A
    /// mutation that nets out to a state equal to the checkpoint is
    /// invisible to the listener.
    pub fn send(&mut self, event: Event) -> Result<()> {
        debug!(event = event.name(), "dispatching event");
        self.apply(|state| handle_event(event, state));
        Ok(())
    }

    /// Run a mutation against the live state and notify the listener if it
    /// produced an observable change.
    ///
    /// Change detection is a full structural clone before the mutation and
    /// a deep equality check after, so it costs O(size of state) per
    /// event. Acceptable while the state stays small; switch to explicit
    /// dirty-flagging if it grows.
    fn apply(&mut self, mutate: impl FnOnce(&mut ApplicationState)) {
        let checkpoint = self.state.clone();

        mutate(&mut self.state);

        if self.state == checkpoint {
            trace!("no observable change, listener not notified");
            return;
        }

        debug!(contacts = self.state.len(), "state changed, notifying listener");
        self.force_update();
    }
}
