//! Abstract interfaces for chronicle components.
//!
//! These traits define the contracts for:
//! - Event storage (persistence)
//! - Event serialization (byte-level encoding for durable backends)

pub mod serializer;
pub mod store;

pub use serializer::{CodecError, Serializer};
pub use store::{FetchResult, Result, StorageError, Store};
