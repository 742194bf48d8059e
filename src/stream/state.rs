//! Lifecycle states of a typed stream.

use std::fmt;

/// Where a typed stream is in its lifecycle.
///
/// `Exhausted` and `Errored` are terminal. Closing is tracked separately
/// because it can happen in any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    /// Nothing pulled yet
    #[default]
    Init,
    /// At least one value decoded, source still open
    Streaming,
    /// The source ran out cleanly
    Exhausted,
    /// A terminal error was recorded
    Errored,
}

impl StreamState {
    pub fn is_terminal(self) -> bool {
        matches!(self, StreamState::Exhausted | StreamState::Errored)
    }
}

impl fmt::Display for StreamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StreamState::Init => "init",
            StreamState::Streaming => "streaming",
            StreamState::Exhausted => "exhausted",
            StreamState::Errored => "errored",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!StreamState::Init.is_terminal());
        assert!(!StreamState::Streaming.is_terminal());
        assert!(StreamState::Exhausted.is_terminal());
        assert!(StreamState::Errored.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(StreamState::default().to_string(), "init");
        assert_eq!(StreamState::Errored.to_string(), "errored");
    }
}
