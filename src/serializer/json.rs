//! JSON event serializer.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::interfaces::{CodecError, Serializer};

/// JSON implementation of [`Serializer`] for serde-capable event types.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl<E> Serializer<E> for JsonSerializer
where
    E: Serialize + DeserializeOwned + Send + Sync,
{
    fn encode(&self, event: &E) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(event)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<E, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
