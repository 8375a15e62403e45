//! Storage implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageConfig, StorageType};
use crate::inspect::Inspect;

pub mod memory;

pub use crate::interfaces::{Result, StorageError, Store};
pub use memory::MemoryStore;

/// Initialize a storage backend from configuration.
///
/// Returns a `Store` implementation selected by the configured storage
/// type. The inspection collaborator is shared with the backend.
pub fn init_storage<E>(config: &StorageConfig, inspect: Arc<dyn Inspect<E>>) -> Arc<dyn Store<E>>
where
    E: Clone + Send + Sync + 'static,
{
    info!("Storage: {:?}", config.storage_type);

    match config.storage_type {
        StorageType::Memory => Arc::new(MemoryStore::new(inspect)),
    }
}
