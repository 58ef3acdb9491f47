//! Standard tagged-union wire format (base tags 0–13).
//!
//! Every encoded value starts with one type-tag byte. Multi-byte scalars
//! are little-endian; variable lengths use the shared size prefix (one
//! byte below 254, `0xFE` + u16, or `0xFF` + u32); doubles and the typed
//! numeric arrays are zero-padded to their natural alignment measured
//! from the start of the message.

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::StandardDecoder;
pub use encoder::StandardEncoder;
pub use error::CodecError;

use crate::Value;

/// Encode with a fresh standard (base format only) encoder.
pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    let mut encoder = StandardEncoder::new();
    encoder.encode(value)
}

/// Decode with a fresh standard (base format only) decoder.
pub fn decode(blob: &[u8]) -> Result<Value, CodecError> {
    let mut decoder = StandardDecoder::new(blob);
    decoder.read_any()
}
