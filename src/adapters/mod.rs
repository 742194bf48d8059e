//! Concrete implementations of the [`EventSource`] trait.
//!
//! # Adapters
//!
//! - [`StreamEventSource`] - Any `Stream` of raw events
//! - [`eventsource::connect`] - SSE connection via `eventsource-client`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockEventSource`] - Scripted events with interaction counters
//!
//! [`EventSource`]: crate::traits::EventSource

pub mod eventsource;
pub mod mock;
pub mod stream_source;

pub use eventsource::{connect, ClientConfig, ClientEventSource};
pub use mock::{MockEventSource, MockProbe};
pub use stream_source::{RawEventStream, StreamEventSource};
