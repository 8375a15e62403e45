//! In-memory event store.
//!
//! Reference backend: one aggregate-id to stream map behind a single
//! guard. State lives and dies with the store value; construction is
//! cheap and performs no I/O.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::inspect::{EventMeta, Inspect};
use crate::interfaces::{FetchResult, Serializer, Store};
use crate::storage::{Result, StorageError};

/// In-memory implementation of [`Store`].
///
/// All access to the stream map goes through one `RwLock`: saves take
/// the write half, reads take the read half, so a fetch can never
/// observe a stream mid-append.
pub struct MemoryStore<E> {
    streams: RwLock<HashMap<String, Vec<EventMeta<E>>>>,
    inspect: Arc<dyn Inspect<E>>,
}

impl<E> MemoryStore<E> {
    /// Create an empty store using the given inspection collaborator.
    pub fn new(inspect: Arc<dyn Inspect<E>>) -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            inspect,
        }
    }
}

#[async_trait]
impl<E> Store<E> for MemoryStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    async fn save(&self, _serializer: &dyn Serializer<E>, events: Vec<E>) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }

        // Stage the whole batch before touching the map: an inspection
        // failure must leave nothing appended.
        let batch = events.len();
        let mut staged = Vec::with_capacity(batch);
        for event in events {
            staged.push(self.inspect.inspect(event)?);
        }

        let mut streams = self.streams.write().await;
        for meta in staged {
            debug!(
                "MemoryStore::save: aggregate_id={}, version={}",
                meta.aggregate_id, meta.version
            );
            streams
                .entry(meta.aggregate_id.clone())
                .or_insert_with(|| Vec::with_capacity(batch))
                .push(meta);
        }

        Ok(())
    }

    async fn fetch(
        &self,
        _serializer: &dyn Serializer<E>,
        aggregate_id: &str,
        version: u32,
    ) -> Result<FetchResult<E>> {
        let streams = self.streams.read().await;
        let stream = streams
            .get(aggregate_id)
            .ok_or_else(|| StorageError::NotFound {
                aggregate_id: aggregate_id.to_string(),
            })?;

        let mut found = 0;
        let mut events = Vec::with_capacity(stream.len());
        for meta in stream {
            if meta.version > version {
                break;
            }
            events.push(meta.event.clone());
            found = meta.version;
        }

        debug!(
            "MemoryStore::fetch: aggregate_id={}, bound={}, returned={}",
            aggregate_id,
            version,
            events.len()
        );
        Ok(FetchResult {
            events,
            version: found,
        })
    }

    async fn list_aggregates(&self) -> Result<Vec<String>> {
        let streams = self.streams.read().await;
        Ok(streams.keys().cloned().collect())
    }
}
