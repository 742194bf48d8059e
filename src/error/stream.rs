//! Streaming-related error types.
//!
//! This module defines the terminal errors a typed stream can end with.

use std::fmt;

use thiserror::Error;

use super::{DecodeError, SourceError};
use crate::sse::payloads::parse_error_fields;
use crate::sse::RawEvent;

/// Terminal error of a typed stream.
///
/// Every variant is terminal: once a stream holds one, it never pulls
/// another event from its source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The stream failed before any event was pulled, e.g. the initiating
    /// request never succeeded.
    #[error("request failed: {message}")]
    Request { message: String },

    /// The event source reported a transport or protocol problem.
    #[error("event source failed: {0}")]
    Transport(#[from] SourceError),

    /// A non-error event payload could not be decoded.
    #[error("failed to decode {event_kind} event: {message}")]
    Decode { event_kind: String, message: String },

    /// The server reported an error through an in-band `error` event.
    #[error("received error while streaming: {raw}")]
    Api {
        error_type: Option<String>,
        message: Option<String>,
        raw: String,
    },
}

impl StreamError {
    /// Wrap a failure that happened before streaming began.
    pub fn request(err: impl fmt::Display) -> Self {
        StreamError::Request {
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(event: &RawEvent, err: DecodeError) -> Self {
        StreamError::Decode {
            event_kind: event.kind().to_string(),
            message: err.message,
        }
    }

    /// Build an API error from the payload of an in-band error event.
    ///
    /// Never fails; payloads that are not JSON keep only their raw text.
    pub fn from_error_event(event: &RawEvent) -> Self {
        let fields = parse_error_fields(event.payload());
        StreamError::Api {
            error_type: fields.error_type,
            message: fields.message,
            raw: event.payload_lossy(),
        }
    }

    /// Check if this error is likely transient and the stream can be
    /// re-established by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StreamError::Transport(SourceError::ConnectionLost { .. }))
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Request { .. } => "E_STREAM_REQUEST",
            StreamError::Transport(err) => err.error_code(),
            StreamError::Decode { .. } => "E_STREAM_DECODE",
            StreamError::Api { .. } => "E_STREAM_API",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error() {
        let err = StreamError::request("status 500");
        assert_eq!(err.to_string(), "request failed: status 500");
        assert_eq!(err.error_code(), "E_STREAM_REQUEST");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_connection_lost_is_retryable() {
        let err: StreamError = SourceError::connection_lost("socket closed").into();
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_SOURCE_CONN");
        assert_eq!(
            err.to_string(),
            "event source failed: connection lost: socket closed"
        );
    }

    #[test]
    fn test_protocol_error_not_retryable() {
        let err: StreamError = SourceError::protocol("bad frame").into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_decode_error_names_event_kind() {
        let event = RawEvent::new("message_delta", "not json");
        let err = StreamError::decode(&event, DecodeError::new("expected value"));
        assert_eq!(
            err.to_string(),
            "failed to decode message_delta event: expected value"
        );
        assert_eq!(err.error_code(), "E_STREAM_DECODE");
    }

    #[test]
    fn test_from_error_event_plain() {
        let event = RawEvent::new("error", r#"{"error":"bad"}"#);
        let err = StreamError::from_error_event(&event);
        assert_eq!(
            err,
            StreamError::Api {
                error_type: None,
                message: Some("bad".to_string()),
                raw: r#"{"error":"bad"}"#.to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            r#"received error while streaming: {"error":"bad"}"#
        );
    }

    #[test]
    fn test_from_error_event_nested() {
        let event = RawEvent::new(
            "error",
            r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#,
        );
        match StreamError::from_error_event(&event) {
            StreamError::Api {
                error_type,
                message,
                ..
            } => {
                assert_eq!(error_type.as_deref(), Some("overloaded_error"));
                assert_eq!(message.as_deref(), Some("Overloaded"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_error_event_non_json() {
        let event = RawEvent::new("error", "gateway timeout");
        let err = StreamError::from_error_event(&event);
        assert_eq!(err.error_code(), "E_STREAM_API");
        assert!(err.to_string().ends_with("gateway timeout"));
    }
}
