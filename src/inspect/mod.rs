//! Event metadata extraction.
//!
//! Derives an event's aggregate identity and stream position without the
//! store understanding event content. Event types either implement the
//! [`AggregateEvent`] accessor capability, or the caller supplies a plain
//! inspection function via [`FnInspector`].

/// Metadata derived from one opaque event.
///
/// Produced once per event on save, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMeta<E> {
    /// Identifies the aggregate stream this event belongs to.
    pub aggregate_id: String,
    /// Caller-assigned position within the stream.
    pub version: u32,
    /// The event itself, untouched.
    pub event: E,
}

/// Errors from metadata extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    #[error("event has no aggregate id")]
    MissingAggregateId,

    #[error("event has no version")]
    MissingVersion,
}

/// Derives [`EventMeta`] from an opaque event.
///
/// Deterministic and side-effect free; fails whole (no partial metadata)
/// on malformed input.
pub trait Inspect<E>: Send + Sync {
    fn inspect(&self, event: E) -> Result<EventMeta<E>, InspectError>;
}

/// Accessor capability for event types that carry their own identity.
pub trait AggregateEvent {
    /// Aggregate stream this event belongs to.
    fn aggregate_id(&self) -> &str;

    /// Caller-assigned version within the stream.
    ///
    /// Version 0 is reserved as the "nothing included" fetch result and
    /// is rejected by inspection.
    fn version(&self) -> u32;
}

/// Inspector over the [`AggregateEvent`] accessors.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessorInspector;

impl<E> Inspect<E> for AccessorInspector
where
    E: AggregateEvent + Send + Sync,
{
    fn inspect(&self, event: E) -> Result<EventMeta<E>, InspectError> {
        if event.aggregate_id().is_empty() {
            return Err(InspectError::MissingAggregateId);
        }
        if event.version() == 0 {
            return Err(InspectError::MissingVersion);
        }
        let aggregate_id = event.aggregate_id().to_string();
        let version = event.version();
        Ok(EventMeta {
            aggregate_id,
            version,
            event,
        })
    }
}

/// Inspector from a plain function or closure.
pub struct FnInspector<F>(pub F);

impl<E, F> Inspect<E> for FnInspector<F>
where
    F: Fn(E) -> Result<EventMeta<E>, InspectError> + Send + Sync,
{
    fn inspect(&self, event: E) -> Result<EventMeta<E>, InspectError> {
        (self.0)(event)
    }
}
