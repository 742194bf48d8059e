//! Error event payload deserialization
//!
//! Servers disagree on the shape of the `error` event body. Both a bare
//! string and a nested object are accepted, anything else is kept raw.

use serde::Deserialize;

/// Envelope of an in-band `error` event.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
    /// Some servers put the message at the root level
    #[serde(default)]
    pub message: Option<String>,
}

/// The `error` field: either a plain message or a typed object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    Text(String),
    Detail {
        #[serde(rename = "type", default)]
        error_type: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

/// Fields extracted from an error payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ErrorFields {
    pub error_type: Option<String>,
    pub message: Option<String>,
}

/// Extract type and message from an error payload, never failing.
pub(crate) fn parse_error_fields(data: &[u8]) -> ErrorFields {
    let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(data) else {
        return ErrorFields::default();
    };

    match envelope.error {
        Some(ErrorBody::Text(message)) => ErrorFields {
            error_type: None,
            message: Some(message),
        },
        Some(ErrorBody::Detail {
            error_type,
            message,
        }) => ErrorFields {
            error_type,
            message: message.or(envelope.message),
        },
        None => ErrorFields {
            error_type: None,
            message: envelope.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_error() {
        let fields = parse_error_fields(br#"{"error":"bad"}"#);
        assert_eq!(fields.error_type, None);
        assert_eq!(fields.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_nested_error_object() {
        let fields = parse_error_fields(
            br#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#,
        );
        assert_eq!(fields.error_type.as_deref(), Some("overloaded_error"));
        assert_eq!(fields.message.as_deref(), Some("Overloaded"));
    }

    #[test]
    fn test_root_level_message() {
        let fields = parse_error_fields(br#"{"message":"rate limited"}"#);
        assert_eq!(fields.message.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_non_json_payload() {
        assert_eq!(parse_error_fields(b"upstream exploded"), ErrorFields::default());
    }

    #[test]
    fn test_json_array_payload() {
        assert_eq!(parse_error_fields(b"[1,2]"), ErrorFields::default());
    }
}
