//! `StandardEncoder` — base wire format encoder.

use beacon_buffers::Writer;

use super::constants::*;
use super::error::CodecError;
use crate::Value;

/// Encoder for the base tagged-union format.
///
/// Rejects the extension variants (`Timestamp`, `Uri`) and the
/// decode-only `Undefined` with [`CodecError::UnsupportedType`]; the
/// extension layer in [`crate::message`] handles those and delegates
/// everything else here unchanged.
pub struct StandardEncoder {
    pub writer: Writer,
}

impl Default for StandardEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), CodecError> {
        match value {
            Value::Null => self.writer.u8(TAG_NULL),
            Value::Bool(true) => self.writer.u8(TAG_TRUE),
            Value::Bool(false) => self.writer.u8(TAG_FALSE),
            Value::Int32(n) => {
                self.writer.u8(TAG_INT32);
                self.writer.i32(*n);
            }
            Value::Int64(n) => {
                self.writer.u8(TAG_INT64);
                self.writer.i64(*n);
            }
            Value::LargeInt(hex) => {
                self.writer.u8(TAG_LARGE_INT);
                self.write_size(hex.len());
                self.writer.utf8(hex);
            }
            Value::Float64(f) => {
                self.writer.u8(TAG_FLOAT64);
                self.writer.pad(8);
                self.writer.f64(*f);
            }
            Value::Str(s) => self.write_str(s),
            Value::Bytes(bytes) => {
                self.writer.u8(TAG_UINT8_LIST);
                self.write_size(bytes.len());
                self.writer.buf(bytes);
            }
            Value::Int32List(values) => {
                self.writer.u8(TAG_INT32_LIST);
                self.write_size(values.len());
                self.writer.pad(4);
                for n in values {
                    self.writer.i32(*n);
                }
            }
            Value::Int64List(values) => {
                self.writer.u8(TAG_INT64_LIST);
                self.write_size(values.len());
                self.writer.pad(8);
                for n in values {
                    self.writer.i64(*n);
                }
            }
            Value::Float64List(values) => {
                self.writer.u8(TAG_FLOAT64_LIST);
                self.write_size(values.len());
                self.writer.pad(8);
                for f in values {
                    self.writer.f64(*f);
                }
            }
            Value::List(items) => {
                self.write_list_hdr(items.len());
                for item in items {
                    self.write_any(item)?;
                }
            }
            Value::Map(pairs) => {
                self.write_map_hdr(pairs.len());
                for (key, val) in pairs {
                    self.write_any(key)?;
                    self.write_any(val)?;
                }
            }
            Value::Timestamp(_) => return Err(CodecError::UnsupportedType("Timestamp")),
            Value::Uri(_) => return Err(CodecError::UnsupportedType("Uri")),
            Value::Undefined => return Err(CodecError::UnsupportedType("Undefined")),
        }
        Ok(())
    }

    /// Writes the shared variable-length size prefix.
    pub fn write_size(&mut self, n: usize) {
        if n < SIZE_U16 as usize {
            self.writer.u8(n as u8);
        } else if n <= 0xffff {
            self.writer.u8(SIZE_U16);
            self.writer.u16(n as u16);
        } else {
            self.writer.u8(SIZE_U32);
            self.writer.u32(n as u32);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.writer.u8(TAG_STRING);
        self.write_size(s.len());
        self.writer.utf8(s);
    }

    pub fn write_list_hdr(&mut self, length: usize) {
        self.writer.u8(TAG_LIST);
        self.write_size(length);
    }

    pub fn write_map_hdr(&mut self, length: usize) {
        self.writer.u8(TAG_MAP);
        self.write_size(length);
    }
}
