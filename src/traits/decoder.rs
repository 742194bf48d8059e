//! Payload decoding capability.
//!
//! A typed stream is parameterized over a decoder instead of inspecting
//! the target type at runtime. JSON via serde is the default; closures
//! cover everything else.

use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

use crate::error::DecodeError;
use crate::sse::RawEvent;

/// Turns the payload of a raw event into a `T`.
pub trait Decoder<T>: Send {
    fn decode(&self, event: &RawEvent) -> Result<T, DecodeError>;
}

impl<T, F> Decoder<T> for F
where
    F: Fn(&RawEvent) -> Result<T, DecodeError> + Send,
{
    fn decode(&self, event: &RawEvent) -> Result<T, DecodeError> {
        self(event)
    }
}

/// Decodes payloads as JSON into any `DeserializeOwned` type.
pub struct JsonDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDecoder").finish()
    }
}

impl<T: DeserializeOwned> Decoder<T> for JsonDecoder<T> {
    fn decode(&self, event: &RawEvent) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(event.payload())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_json_decoder() {
        let decoder = JsonDecoder::<Item>::new();
        let item = decoder
            .decode(&RawEvent::new("message_start", r#"{"id":"1"}"#))
            .unwrap();
        assert_eq!(item, Item { id: "1".to_string() });
    }

    #[test]
    fn test_json_decoder_rejects_malformed_payload() {
        let decoder = JsonDecoder::<Item>::new();
        let err = decoder
            .decode(&RawEvent::new("message_start", "not json"))
            .unwrap_err();
        assert!(err.message.contains("expected"));
    }

    #[test]
    fn test_json_decoder_rejects_missing_field() {
        let decoder = JsonDecoder::<Item>::new();
        let err = decoder
            .decode(&RawEvent::new("message_start", r#"{"other":1}"#))
            .unwrap_err();
        assert!(err.message.contains("missing field `id`"));
    }

    #[test]
    fn test_closure_decoder() {
        let decoder = |event: &RawEvent| -> Result<usize, DecodeError> {
            Ok(event.payload().len())
        };
        assert_eq!(decoder.decode(&RawEvent::new("len", "abcd")).unwrap(), 4);
    }
}
