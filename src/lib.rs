//! ssestream - typed, lookahead-capable iteration over server-sent events
//!
//! A [`TypedStream`] wraps an [`EventSource`] that produces raw SSE events,
//! decodes each payload into a caller-defined type and hands values out
//! through a pull-based cursor with non-destructive `peek`/`peek_n`.
//!
//! [`TypedStream`]: stream::TypedStream
//! [`EventSource`]: traits::EventSource

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod sse;
pub mod stream;
pub mod traits;

pub use config::StreamConfig;
pub use error::{DecodeError, SourceError, StreamError, StreamResult};
pub use sse::RawEvent;
pub use stream::{StreamState, TypedStream};
pub use traits::{Decoder, EventSource, JsonDecoder};
