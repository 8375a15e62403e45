//! Serializer implementations.

pub mod json;

pub use json::JsonSerializer;
