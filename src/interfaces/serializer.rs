//! Event serialization interface.

/// Errors that can occur while encoding or decoding events.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Interface for byte-level event encoding.
///
/// The in-memory store accepts a serializer and passes it through
/// untouched; durable backends use it to encode events for persistence
/// and decode them on read.
pub trait Serializer<E>: Send + Sync {
    /// Encode an event to bytes.
    fn encode(&self, event: &E) -> Result<Vec<u8>, CodecError>;

    /// Decode an event from bytes.
    fn decode(&self, bytes: &[u8]) -> Result<E, CodecError>;
}
