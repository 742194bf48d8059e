//! Raw SSE event as handed over by an event source.

use bytes::Bytes;
use std::str::Utf8Error;

/// Event kind that marks an in-band error reported by the server.
pub const ERROR_EVENT_KIND: &str = "error";

/// A single wire event that has already been split out of the byte stream.
///
/// The `kind` is the value of the SSE `event:` field and `payload` is the
/// joined `data:` lines. Both are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawEvent {
    kind: String,
    payload: Bytes,
}

impl RawEvent {
    /// Create a raw event from its kind and payload.
    pub fn new(kind: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// The SSE event kind (`event:` field).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The opaque payload bytes.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// The payload as UTF-8, if it is valid.
    pub fn payload_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.payload)
    }

    /// Payload rendered for messages; invalid UTF-8 is replaced.
    pub fn payload_lossy(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    /// Whether this event carries the given kind.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_str_payload() {
        let event = RawEvent::new("message_start", r#"{"id":"1"}"#);
        assert_eq!(event.kind(), "message_start");
        assert_eq!(event.payload_str().unwrap(), r#"{"id":"1"}"#);
        assert!(event.is_kind("message_start"));
        assert!(!event.is_kind(ERROR_EVENT_KIND));
    }

    #[test]
    fn test_payload_lossy_replaces_invalid_utf8() {
        let event = RawEvent::new("delta", vec![b'o', b'k', 0xff]);
        assert!(event.payload_str().is_err());
        assert_eq!(event.payload_lossy(), "ok\u{fffd}");
    }

    #[test]
    fn test_default_is_empty() {
        let event = RawEvent::default();
        assert_eq!(event.kind(), "");
        assert!(event.payload().is_empty());
    }
}
