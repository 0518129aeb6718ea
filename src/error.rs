//! Error types for the state store.

use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unrecognized event: {0}")]
    UnrecognizedEvent(String),

    #[error("Event '{0}' requires a payload, but none was given")]
    MissingPayload(&'static str),

    #[error("Invalid payload for event '{event}': {source}")]
    InvalidPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
