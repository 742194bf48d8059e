//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`EventSource`] - Cursor over raw SSE events (transport seam)
//! - [`Decoder`] - Turns raw payloads into typed values

pub mod decoder;
pub mod event_source;

pub use decoder::{Decoder, JsonDecoder};
pub use event_source::EventSource;
