//! Store trait definition.

use async_trait::async_trait;

use crate::inspect::InspectError;
use crate::interfaces::serializer::{CodecError, Serializer};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("aggregate not found: {aggregate_id}")]
    NotFound { aggregate_id: String },

    #[error("inspect error: {0}")]
    Inspect(#[from] InspectError),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Ordered prefix of an aggregate's stream, as returned by [`Store::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult<E> {
    /// Collected events, oldest first.
    pub events: Vec<E>,
    /// Version of the last event included; 0 when none qualified.
    pub version: u32,
}

/// Interface for event persistence.
///
/// Versions are caller-assigned; the store maintains each aggregate's
/// stream in save order and does not enforce monotonicity or
/// gap-freedom.
///
/// Implementations:
/// - `MemoryStore`: in-memory reference backend
///
/// Durable or networked backends must satisfy the same pre/postconditions
/// without the core depending on their internals.
#[async_trait]
pub trait Store<E>: Send + Sync
where
    E: Clone + Send + Sync + 'static,
{
    /// Append events to the tails of their aggregates' streams.
    ///
    /// Each event's metadata is derived by the inspection collaborator;
    /// any inspection failure aborts the call with nothing appended.
    /// Call order is preserved across the batch. An empty batch is a
    /// no-op success.
    async fn save(&self, serializer: &dyn Serializer<E>, events: Vec<E>) -> Result<()>;

    /// Retrieve the ordered prefix of an aggregate's stream whose
    /// versions do not exceed `version` (inclusive bound).
    ///
    /// Scans from the start of the stream and stops at the first event
    /// above the bound; relies on insertion order approximating version
    /// order. Fails with [`StorageError::NotFound`] when no stream has
    /// been recorded for `aggregate_id`.
    async fn fetch(
        &self,
        serializer: &dyn Serializer<E>,
        aggregate_id: &str,
        version: u32,
    ) -> Result<FetchResult<E>>;

    /// List the ids of all aggregates with a recorded stream.
    async fn list_aggregates(&self) -> Result<Vec<String>>;
}
