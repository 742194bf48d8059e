//! Event source over an async stream of raw events.
//!
//! Bridges any wire decoder that already produces a `futures::Stream` of
//! raw events into the pull-based [`EventSource`] contract.

use async_trait::async_trait;
use futures_util::stream::{BoxStream, Stream, StreamExt};

use crate::error::SourceError;
use crate::sse::RawEvent;
use crate::traits::EventSource;

/// Boxed stream of raw events, as produced by the connectors in this crate.
pub type RawEventStream = BoxStream<'static, Result<RawEvent, SourceError>>;

/// [`EventSource`] backed by a `Stream<Item = Result<RawEvent, SourceError>>`.
///
/// The first stream error ends the source; releasing drops the inner
/// stream, which closes whatever connection it holds.
pub struct StreamEventSource<St = RawEventStream> {
    inner: Option<St>,
    current: Option<RawEvent>,
    error: Option<SourceError>,
}

impl<St> StreamEventSource<St>
where
    St: Stream<Item = Result<RawEvent, SourceError>> + Send + Unpin,
{
    pub fn new(inner: St) -> Self {
        Self {
            inner: Some(inner),
            current: None,
            error: None,
        }
    }

    /// Whether the inner stream has been dropped (released or finished).
    pub fn is_finished(&self) -> bool {
        self.inner.is_none()
    }
}

#[async_trait]
impl<St> EventSource for StreamEventSource<St>
where
    St: Stream<Item = Result<RawEvent, SourceError>> + Send + Unpin,
{
    async fn pull_next(&mut self) -> bool {
        let Some(inner) = self.inner.as_mut() else {
            return false;
        };

        match inner.next().await {
            Some(Ok(event)) => {
                self.current = Some(event);
                true
            }
            Some(Err(err)) => {
                tracing::debug!(error = %err, "event stream failed");
                self.error = Some(err);
                self.inner = None;
                false
            }
            None => {
                self.inner = None;
                false
            }
        }
    }

    fn current_raw(&self) -> Option<&RawEvent> {
        self.current.as_ref()
    }

    fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    async fn release(&mut self) -> Result<(), SourceError> {
        if self.inner.take().is_some() {
            tracing::debug!("released event stream");
        }
        Ok(())
    }
}
