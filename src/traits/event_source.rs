//! Event source trait abstraction.
//!
//! An event source owns the wire decoder that splits a byte stream into
//! discrete events. Typed streams only ever talk to it through this trait,
//! which keeps transports swappable and lets tests script the events.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::sse::RawEvent;

/// Cursor over raw SSE events.
///
/// # Contract
///
/// - `pull_next` advances to the next event and returns `true`, or returns
///   `false` on exhaustion or failure.
/// - `error` is `Some` exactly when the last `pull_next` failed because of
///   a transport/protocol problem rather than clean exhaustion.
/// - `current_raw` returns the event made available by the last successful
///   `pull_next`, and `None` before the first one.
/// - `release` tears down the underlying resources and is idempotent. Pulls
///   after release return `false`.
///
/// # Example
///
/// ```ignore
/// use ssestream::traits::EventSource;
///
/// async fn drain<S: EventSource>(source: &mut S) -> Vec<String> {
///     let mut kinds = Vec::new();
///     while source.pull_next().await {
///         if let Some(event) = source.current_raw() {
///             kinds.push(event.kind().to_string());
///         }
///     }
///     kinds
/// }
/// ```
#[async_trait]
pub trait EventSource: Send {
    /// Advance to the next raw event.
    async fn pull_next(&mut self) -> bool;

    /// The raw event made available by the last successful pull.
    fn current_raw(&self) -> Option<&RawEvent>;

    /// The failure behind the last unsuccessful pull, if any.
    fn error(&self) -> Option<&SourceError>;

    /// Release the underlying resources.
    async fn release(&mut self) -> Result<(), SourceError>;
}

#[async_trait]
impl<S: EventSource + ?Sized> EventSource for Box<S> {
    async fn pull_next(&mut self) -> bool {
        (**self).pull_next().await
    }

    fn current_raw(&self) -> Option<&RawEvent> {
        (**self).current_raw()
    }

    fn error(&self) -> Option<&SourceError> {
        (**self).error()
    }

    async fn release(&mut self) -> Result<(), SourceError> {
        (**self).release().await
    }
}
