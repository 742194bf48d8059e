//! `eventsource-client` connector.
//!
//! Opens an SSE connection with the `eventsource-client` crate, which owns
//! the wire parsing, and exposes it as a [`StreamEventSource`]. Automatic
//! reconnection is disabled: retrying is up to the caller, who builds a new
//! stream.

use eventsource_client as es;
use eventsource_client::Client as _;
use futures_util::future;
use futures_util::stream::{Stream, StreamExt};

use super::stream_source::{RawEventStream, StreamEventSource};
use crate::error::SourceError;
use crate::sse::RawEvent;

/// Connection settings for an SSE endpoint.
///
/// # Example
///
/// ```
/// use ssestream::adapters::eventsource::ClientConfig;
///
/// let config = ClientConfig::new("https://example.com/v1/stream")
///     .with_header("Authorization", "Bearer token");
/// assert_eq!(config.headers.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Endpoint URL
    pub url: String,
    /// Extra request headers, in order
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Event source over an `eventsource-client` connection.
pub type ClientEventSource = StreamEventSource<RawEventStream>;

/// Build an `eventsource-client` client and wrap its event stream.
///
/// The connection is opened lazily on the first pull. Comments and other
/// non-event items are dropped. A clean server close ends the source
/// without an error; any other client error ends it as a failure.
pub fn connect(config: &ClientConfig) -> Result<ClientEventSource, SourceError> {
    let mut builder = es::ClientBuilder::for_url(&config.url)
        .map_err(|e| SourceError::protocol(format!("invalid url {}: {:?}", config.url, e)))?;

    for (name, value) in &config.headers {
        builder = builder
            .header(name, value)
            .map_err(|e| SourceError::protocol(format!("invalid header {}: {:?}", name, e)))?;
    }

    let client = builder
        .reconnect(es::ReconnectOptions::reconnect(false).build())
        .build();

    tracing::debug!(url = %config.url, "opening event stream");

    Ok(StreamEventSource::new(raw_events(client.stream())))
}

/// What a single client item means for the raw event stream.
#[derive(Debug)]
enum ClientItem {
    Event(Result<RawEvent, SourceError>),
    Skip,
    End,
}

fn classify_item(item: Result<es::SSE, es::Error>) -> ClientItem {
    match item {
        Ok(es::SSE::Event(event)) => {
            ClientItem::Event(Ok(RawEvent::new(event.event_type, event.data)))
        }
        Ok(_) => ClientItem::Skip,
        // With reconnect off, the server closing the response normally shows up as Eof
        Err(es::Error::Eof) => ClientItem::End,
        Err(err) => {
            ClientItem::Event(Err(SourceError::connection_lost(format!("{:?}", err))))
        }
    }
}

/// Adapt the client's item stream to raw events, stopping at a clean close.
fn raw_events<St>(items: St) -> RawEventStream
where
    St: Stream<Item = Result<es::SSE, es::Error>> + Send + 'static,
{
    items
        .map(classify_item)
        .take_while(|item| future::ready(!matches!(item, ClientItem::End)))
        .filter_map(|item| {
            future::ready(match item {
                ClientItem::Event(event) => Some(event),
                ClientItem::Skip | ClientItem::End => None,
            })
        })
        .boxed()
}
