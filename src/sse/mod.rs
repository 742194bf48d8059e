//! Server-sent event primitives
//!
//! Wire parsing is left to the event source. This module only defines the
//! raw event handed over by a source and the lenient parsing of in-band
//! `error` event bodies.
//!
//! # Module structure
//! - `event` - RawEvent and the error kind sentinel
//! - `payloads` - Internal error payload deserialization

mod event;
pub(crate) mod payloads;

pub use event::{RawEvent, ERROR_EVENT_KIND};
