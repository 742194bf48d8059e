//! Stream configuration types.
//!
//! Controls how a typed stream classifies raw event kinds.

use crate::sse::ERROR_EVENT_KIND;

/// Environment variable overriding the in-band error kind.
pub const ERROR_KIND_ENV: &str = "SSESTREAM_ERROR_KIND";
/// Environment variable listing kinds to skip, comma separated.
pub const SKIP_KINDS_ENV: &str = "SSESTREAM_SKIP_KINDS";

/// Configuration for a typed stream.
///
/// Use the builder pattern to customize classification.
///
/// # Example
///
/// ```
/// use ssestream::config::StreamConfig;
///
/// let config = StreamConfig::default().with_skip_kind("ping");
/// assert!(config.is_skipped("ping"));
/// assert!(config.is_error_kind("error"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfig {
    /// Kind marking an in-band error event (default: "error")
    pub error_kind: String,
    /// Kinds discarded without decoding, e.g. keep-alive pings (default: none)
    pub skip_kinds: Vec<String>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            error_kind: ERROR_EVENT_KIND.to_string(),
            skip_kinds: Vec::new(),
        }
    }
}

impl StreamConfig {
    /// Create a new StreamConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind treated as an in-band error.
    pub fn with_error_kind(mut self, kind: impl Into<String>) -> Self {
        self.error_kind = kind.into();
        self
    }

    /// Add a kind that is discarded without decoding.
    pub fn with_skip_kind(mut self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        if !self.skip_kinds.contains(&kind) {
            self.skip_kinds.push(kind);
        }
        self
    }

    /// Whether events of this kind terminate the stream with an API error.
    pub fn is_error_kind(&self, kind: &str) -> bool {
        self.error_kind == kind
    }

    /// Whether events of this kind are dropped before decoding.
    pub fn is_skipped(&self, kind: &str) -> bool {
        self.skip_kinds.iter().any(|k| k == kind)
    }

    /// Create config from `SSESTREAM_ERROR_KIND` and `SSESTREAM_SKIP_KINDS`.
    /// Unset or blank variables keep the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(kind) = std::env::var(ERROR_KIND_ENV) {
            let kind = kind.trim();
            if !kind.is_empty() {
                config = config.with_error_kind(kind);
            }
        }

        if let Ok(kinds) = std::env::var(SKIP_KINDS_ENV) {
            for kind in kinds.split(',').map(str::trim).filter(|k| !k.is_empty()) {
                config = config.with_skip_kind(kind);
            }
        }

        config
    }
}
