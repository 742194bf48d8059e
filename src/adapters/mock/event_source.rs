//! Mock event source for testing.
//!
//! Replays a scripted list of raw events and records how often it was
//! pulled and released, so tests can assert on source interaction after
//! the source has been moved into a stream.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::SourceError;
use crate::sse::RawEvent;
use crate::traits::EventSource;

#[derive(Debug, Default)]
struct MockStats {
    pulls: usize,
    releases: usize,
}

/// Shared view of a [`MockEventSource`]'s interaction counters.
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    stats: Arc<Mutex<MockStats>>,
}

impl MockProbe {
    /// Number of `pull_next` calls so far, including failed ones.
    pub fn pulls(&self) -> usize {
        self.stats.lock().unwrap().pulls
    }

    /// Number of `release` calls so far.
    pub fn releases(&self) -> usize {
        self.stats.lock().unwrap().releases
    }
}

/// Event source with scripted events.
///
/// # Example
///
/// ```ignore
/// use ssestream::adapters::mock::MockEventSource;
///
/// let source = MockEventSource::from_pairs([
///     ("message_start", r#"{"id":"1"}"#),
///     ("error", r#"{"error":"bad"}"#),
/// ]);
/// let probe = source.probe();
/// // hand `source` to a stream, then inspect `probe.pulls()`
/// ```
#[derive(Debug, Default)]
pub struct MockEventSource {
    events: Vec<RawEvent>,
    /// Number of events handed out so far
    delivered: usize,
    /// Fail with this error once `n` events have been delivered
    fail_after: Option<(usize, SourceError)>,
    /// Returned by every `release` call
    release_error: Option<SourceError>,
    error: Option<SourceError>,
    released: bool,
    probe: MockProbe,
}

impl MockEventSource {
    /// Create a source that yields `events` and then ends cleanly.
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    /// Create a source from `(kind, payload)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(kind, payload)| RawEvent::new(kind, payload.to_string()))
                .collect(),
        )
    }

    /// Create a source whose first pull fails.
    pub fn failing(err: SourceError) -> Self {
        Self::default().with_error_after(0, err)
    }

    /// Fail with `err` once `n` events have been delivered.
    pub fn with_error_after(mut self, n: usize, err: SourceError) -> Self {
        self.fail_after = Some((n, err));
        self
    }

    /// Make `release` fail with `err`. The source still counts as released.
    pub fn with_release_error(mut self, err: SourceError) -> Self {
        self.release_error = Some(err);
        self
    }

    /// Handle for inspecting pull/release counts after the source moves.
    pub fn probe(&self) -> MockProbe {
        self.probe.clone()
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn pull_next(&mut self) -> bool {
        self.probe.stats.lock().unwrap().pulls += 1;

        if self.released {
            return false;
        }

        if let Some((n, err)) = &self.fail_after {
            if self.delivered >= *n {
                self.error = Some(err.clone());
                return false;
            }
        }

        if self.delivered >= self.events.len() {
            return false;
        }

        self.delivered += 1;
        true
    }

    fn current_raw(&self) -> Option<&RawEvent> {
        self.delivered
            .checked_sub(1)
            .and_then(|index| self.events.get(index))
    }

    fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    async fn release(&mut self) -> Result<(), SourceError> {
        self.probe.stats.lock().unwrap().releases += 1;
        self.released = true;
        match &self.release_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_events_in_order() {
        let mut source = MockEventSource::from_pairs([("a", "1"), ("b", "2")]);
        assert!(source.current_raw().is_none());

        assert!(source.pull_next().await);
        assert_eq!(source.current_raw().unwrap().kind(), "a");
        assert!(source.pull_next().await);
        assert_eq!(source.current_raw().unwrap().kind(), "b");
        assert!(!source.pull_next().await);
        assert!(source.error().is_none());
    }

    #[tokio::test]
    async fn test_error_after_n_events() {
        let mut source = MockEventSource::from_pairs([("a", "1"), ("b", "2")])
            .with_error_after(1, SourceError::connection_lost("reset"));

        assert!(source.pull_next().await);
        assert!(!source.pull_next().await);
        assert_eq!(source.error(), Some(&SourceError::connection_lost("reset")));
    }

    #[tokio::test]
    async fn test_probe_counts_pulls_and_releases() {
        let mut source = MockEventSource::failing(SourceError::protocol("nope"));
        let probe = source.probe();

        assert!(!source.pull_next().await);
        source.release().await.unwrap();
        assert!(!source.pull_next().await);

        assert_eq!(probe.pulls(), 2);
        assert_eq!(probe.releases(), 1);
    }

    #[tokio::test]
    async fn test_release_error() {
        let mut source = MockEventSource::from_pairs([("a", "1")])
            .with_release_error(SourceError::connection_lost("reset"));
        let probe = source.probe();

        assert_eq!(
            source.release().await,
            Err(SourceError::connection_lost("reset"))
        );
        assert!(!source.pull_next().await);
        assert_eq!(probe.releases(), 1);
    }
}
