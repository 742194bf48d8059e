//! Typed, lookahead-capable cursor over an SSE event source.
//!
//! [`TypedStream`] pulls raw events lazily from an [`EventSource`], decodes
//! each one into `T` exactly once and delivers the values through a
//! pull-based cursor:
//!
//! ```ignore
//! let mut stream: TypedStream<Delta, _> = TypedStream::new(source, None);
//!
//! while stream.next().await {
//!     let delta = stream.current().unwrap();
//!     // ...
//! }
//! if let Some(err) = stream.err() {
//!     // the stream ended with an error rather than clean exhaustion
//! }
//! stream.close().await?;
//! ```
//!
//! `peek` and `peek_n` look ahead without moving the cursor. Values decoded
//! while peeking wait in a FIFO buffer and are handed out by `next` in wire
//! order, so nothing is decoded twice.

mod state;

pub use state::StreamState;

use futures_util::stream::{self, Stream};
use serde::de::DeserializeOwned;
use std::collections::VecDeque;

use crate::config::StreamConfig;
use crate::error::{SourceError, StreamError, StreamResult};
use crate::traits::{Decoder, EventSource, JsonDecoder};

/// Outcome of a single raw pull.
enum Pulled<T> {
    Value(T),
    Skipped,
    Failed(StreamError),
}

/// Cursor over typed values decoded from an [`EventSource`].
///
/// Designed for a single consumer: every operation takes `&mut self`.
/// Termination is signalled through return values; `err` tells clean
/// exhaustion apart from failure.
pub struct TypedStream<T, S, D = JsonDecoder<T>> {
    source: S,
    decoder: D,
    config: StreamConfig,
    /// Values decoded ahead of the cursor, in wire order
    lookahead: VecDeque<T>,
    current: Option<T>,
    error: Option<StreamError>,
    state: StreamState,
    closed: bool,
}

impl<T, S> TypedStream<T, S>
where
    T: DeserializeOwned,
    S: EventSource,
{
    /// Create a stream that decodes payloads as JSON.
    ///
    /// A `Some` initial error puts the stream straight into the errored
    /// state; the source is then never pulled.
    pub fn new(source: S, initial_error: Option<StreamError>) -> Self {
        Self::with_decoder(source, JsonDecoder::new(), initial_error)
    }
}

impl<T, S, D> TypedStream<T, S, D>
where
    S: EventSource,
    D: Decoder<T>,
{
    /// Create a stream with a custom payload decoder.
    pub fn with_decoder(source: S, decoder: D, initial_error: Option<StreamError>) -> Self {
        let state = match &initial_error {
            Some(err) => {
                tracing::debug!(error = %err, "stream created in errored state");
                StreamState::Errored
            }
            None => StreamState::Init,
        };

        Self {
            source,
            decoder,
            config: StreamConfig::default(),
            lookahead: VecDeque::new(),
            current: None,
            error: initial_error,
            state,
            closed: false,
        }
    }

    /// Replace the event classification config.
    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.config = config;
        self
    }

    /// Advance the cursor by one value.
    ///
    /// Returns `false` once the stream is exhausted, errored or closed;
    /// every later call returns `false` as well.
    pub async fn next(&mut self) -> bool {
        if self.closed || (self.lookahead.is_empty() && !self.fill_one().await) {
            self.current = None;
            return false;
        }

        self.current = self.lookahead.pop_front();
        self.current.is_some()
    }

    /// The value delivered by the last successful `next`.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// The terminal error, if the stream ended in one.
    pub fn err(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }

    /// The value the next call to `next` would deliver, without advancing.
    pub async fn peek(&mut self) -> Option<&T> {
        if self.closed || (self.lookahead.is_empty() && !self.fill_one().await) {
            return None;
        }
        self.lookahead.front()
    }

    /// Snapshot of up to `n` upcoming values, without advancing.
    ///
    /// Returns fewer than `n` values when the stream ends first. `n == 0`
    /// never touches the source.
    pub async fn peek_n(&mut self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        if n == 0 || self.closed {
            return Vec::new();
        }

        while self.lookahead.len() < n && self.fill_one().await {}

        self.lookahead.iter().take(n).cloned().collect()
    }

    /// Release the event source. Only the first call does anything.
    ///
    /// The source is released even when the stream was created with an
    /// initial error. Buffered values and the terminal error are kept, but
    /// the cursor is finished afterwards.
    pub async fn close(&mut self) -> StreamResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        tracing::debug!(
            state = %self.state,
            buffered = self.lookahead.len(),
            "closing stream"
        );

        self.source.release().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to release event source");
            StreamError::from(err)
        })
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of decoded values waiting ahead of the cursor.
    pub fn buffered(&self) -> usize {
        self.lookahead.len()
    }

    /// Turn the cursor into a `Stream` of results.
    ///
    /// Yields every value, then the terminal error if there is one, then
    /// ends. The source is released once the cursor is finished; a release
    /// failure is only logged, never yielded. Drive `next` and `close`
    /// directly to observe it.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, StreamError>> {
        stream::unfold(Some(self), |state| async move {
            let mut typed = state?;

            if typed.next().await {
                let value = typed.current.take()?;
                return Some((Ok(value), Some(typed)));
            }

            // Release failures are logged by close and don't mask the
            // stream's own outcome.
            let _ = typed.close().await;
            typed.error.take().map(|err| (Err(err), None))
        })
    }

    /// Pull raw events until one value lands in the lookahead buffer or the
    /// stream reaches a terminal state.
    async fn fill_one(&mut self) -> bool {
        if self.closed || self.state.is_terminal() {
            return false;
        }

        loop {
            if !self.source.pull_next().await {
                match self.source.error().cloned() {
                    Some(err) => self.fail(err.into()),
                    None => self.exhaust(),
                }
                return false;
            }

            match self.classify_current() {
                Pulled::Value(value) => {
                    self.lookahead.push_back(value);
                    if self.state == StreamState::Init {
                        tracing::debug!("stream started");
                        self.state = StreamState::Streaming;
                    }
                    return true;
                }
                Pulled::Skipped => continue,
                Pulled::Failed(err) => {
                    self.fail(err);
                    return false;
                }
            }
        }
    }

    fn classify_current(&self) -> Pulled<T> {
        let Some(event) = self.source.current_raw() else {
            return Pulled::Failed(
                SourceError::protocol("event source advanced without an event").into(),
            );
        };

        tracing::trace!(
            kind = event.kind(),
            bytes = event.payload().len(),
            "pulled raw event"
        );

        if self.config.is_error_kind(event.kind()) {
            return Pulled::Failed(StreamError::from_error_event(event));
        }

        if self.config.is_skipped(event.kind()) {
            tracing::debug!(kind = event.kind(), "skipping event");
            return Pulled::Skipped;
        }

        match self.decoder.decode(event) {
            Ok(value) => Pulled::Value(value),
            Err(err) => Pulled::Failed(StreamError::decode(event, err)),
        }
    }

    fn fail(&mut self, err: StreamError) {
        tracing::debug!(code = err.error_code(), error = %err, "stream errored");
        self.error = Some(err);
        self.state = StreamState::Errored;
    }

    fn exhaust(&mut self) {
        tracing::debug!(buffered = self.lookahead.len(), "stream exhausted");
        self.state = StreamState::Exhausted;
    }
}
