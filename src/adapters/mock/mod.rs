//! Mock implementations for testing.
//!
//! - [`MockEventSource`] - Event source replaying scripted raw events

pub mod event_source;

pub use event_source::{MockEventSource, MockProbe};
