//! Error types for typed SSE streams.
//!
//! - [`SourceError`]: transport/protocol failures reported by an event source
//! - [`DecodeError`]: a payload could not be turned into the target type
//! - [`StreamError`]: the terminal error a stream ends with
//!
//! Stream operations never return these directly. A stream signals
//! termination through its return values and exposes the cause via
//! `TypedStream::err`.

mod decode;
mod source;
mod stream;

pub use decode::DecodeError;
pub use source::SourceError;
pub use stream::StreamError;

/// Type alias for Results using StreamError.
pub type StreamResult<T> = Result<T, StreamError>;
