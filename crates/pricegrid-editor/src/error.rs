//! Error types for the editor surface boundary
//!
//! Commands themselves never fail. Only encoding the payload a UI control
//! carries, or decoding what it sent back, can.

/// Errors resolving editor events
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// `data-command` payload is not a command
    #[error("invalid command payload: {0}")]
    InvalidCommand(#[source] serde_json::Error),

    /// `data-input` payload is not an input target
    #[error("invalid input target: {0}")]
    InvalidInputTarget(#[source] serde_json::Error),

    /// Command or input target could not be encoded for a control
    #[error("failed to encode control payload: {0}")]
    Encode(#[source] serde_json::Error),
}
