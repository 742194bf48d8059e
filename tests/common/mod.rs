//! Common test utilities for integration tests.
//!
//! Provides the payload type used across the stream tests and helpers for
//! building scripted event sources.
//!
//! # Example
//!
//! ```ignore
//! use common::{item_stream, ItemStream};
//!
//! let (mut stream, probe) = item_stream(&[("message_start", r#"{"id":"1","data":"x"}"#)]);
//! ```

#![allow(dead_code)]

use serde::Deserialize;
use ssestream::adapters::mock::{MockEventSource, MockProbe};
use ssestream::{StreamError, TypedStream};

/// Payload carried by the test events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestItem {
    pub id: String,
    pub data: String,
}

pub type ItemStream = TypedStream<TestItem, MockEventSource>;

/// JSON payload for a `TestItem`.
pub fn item(id: &str, data: &str) -> String {
    format!(r#"{{"id":"{}","data":"{}"}}"#, id, data)
}

/// Source yielding one `message_delta` event per `(id, data)` pair.
pub fn item_source(items: &[(&str, &str)]) -> MockEventSource {
    let payloads: Vec<String> = items.iter().map(|(id, data)| item(id, data)).collect();
    MockEventSource::from_pairs(payloads.iter().map(|p| ("message_delta", p.as_str())))
}

/// Stream over raw `(kind, payload)` pairs plus the source's probe.
pub fn item_stream(events: &[(&str, &str)]) -> (ItemStream, MockProbe) {
    let source = MockEventSource::from_pairs(events.iter().copied());
    let probe = source.probe();
    (TypedStream::new(source, None), probe)
}

/// Stream over `(id, data)` items plus the source's probe.
pub fn items_stream(items: &[(&str, &str)]) -> (ItemStream, MockProbe) {
    let source = item_source(items);
    let probe = source.probe();
    (TypedStream::new(source, None), probe)
}

/// Stream created with a construction error.
pub fn failed_stream(source: MockEventSource, message: &str) -> ItemStream {
    TypedStream::new(source, Some(StreamError::request(message)))
}

/// Drain the stream, collecting the ids of every delivered item.
pub async fn collect_ids(stream: &mut ItemStream) -> Vec<String> {
    let mut ids = Vec::new();
    while stream.next().await {
        ids.push(stream.current().expect("current after next").id.clone());
    }
    ids
}
