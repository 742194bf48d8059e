//! Errors reported by an event source.

use thiserror::Error;

/// Transport or protocol failure reported by an [`EventSource`].
///
/// [`EventSource`]: crate::traits::EventSource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The underlying connection dropped or could not be established.
    #[error("connection lost: {message}")]
    ConnectionLost { message: String },

    /// The peer sent something the wire decoder could not make sense of.
    #[error("protocol error: {message}")]
    Protocol { message: String },
}

impl SourceError {
    pub fn connection_lost(message: impl Into<String>) -> Self {
        SourceError::ConnectionLost {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        SourceError::Protocol {
            message: message.into(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::ConnectionLost { .. } => "E_SOURCE_CONN",
            SourceError::Protocol { .. } => "E_SOURCE_PROTO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SourceError::connection_lost("reset by peer").to_string(),
            "connection lost: reset by peer"
        );
        assert_eq!(
            SourceError::protocol("bad content type").to_string(),
            "protocol error: bad content type"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SourceError::connection_lost("x").error_code(), "E_SOURCE_CONN");
        assert_eq!(SourceError::protocol("x").error_code(), "E_SOURCE_PROTO");
    }
}
