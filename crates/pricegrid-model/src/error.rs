//! Error types for the persisted attribute codec

/// Errors decoding or encoding the persisted attribute record
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input is not a valid attribute record
    #[error("malformed attribute record: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Record could not be serialized
    #[error("failed to encode attribute record: {0}")]
    Encode(#[source] serde_json::Error),
}
