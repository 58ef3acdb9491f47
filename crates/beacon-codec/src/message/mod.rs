//! Extensible channel message codec.
//!
//! A strict superset of the [`crate::standard`] format: two extension
//! tags are reserved above the base range, everything else delegates to
//! the base codec unchanged. Stateless — a fresh encoder/decoder is
//! created per call by the [`encode`]/[`decode`] helpers, and nothing
//! outlives a single call.

pub mod constants;
pub mod decoder;
pub mod encoder;

pub use decoder::MessageDecoder;
pub use encoder::MessageEncoder;

use super::standard::CodecError;
use crate::Value;

/// Encode with a fresh extended message encoder.
pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    let mut encoder = MessageEncoder::new();
    encoder.encode(value)
}

/// Decode with a fresh extended message decoder.
pub fn decode(blob: &[u8]) -> Result<Value, CodecError> {
    let mut decoder = MessageDecoder::new(blob);
    decoder.read_any()
}
