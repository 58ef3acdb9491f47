//! `MessageEncoder` — extended channel encoder.

use super::constants::*;
use crate::standard::{CodecError, StandardEncoder};
use crate::Value;

/// Extended encoder: handles the two extension scalars and routes
/// container recursion through itself so nested extension values encode
/// correctly; every other variant delegates to the inner base encoder.
pub struct MessageEncoder {
    pub inner: StandardEncoder,
}

impl Default for MessageEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageEncoder {
    pub fn new() -> Self {
        Self {
            inner: StandardEncoder::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.inner.writer.reset();
        self.write_any(value)?;
        Ok(self.inner.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), CodecError> {
        match value {
            Value::Timestamp(ms) => {
                self.inner.writer.u8(TAG_DATE_TIME);
                self.inner.writer.i64(*ms);
                Ok(())
            }
            Value::Uri(url) => {
                self.inner.writer.u8(TAG_URI);
                let bytes = url.as_str().as_bytes();
                self.inner.write_size(bytes.len());
                self.inner.writer.buf(bytes);
                Ok(())
            }
            Value::List(items) => {
                self.inner.write_list_hdr(items.len());
                for item in items {
                    self.write_any(item)?;
                }
                Ok(())
            }
            Value::Map(pairs) => {
                self.inner.write_map_hdr(pairs.len());
                for (key, val) in pairs {
                    self.write_any(key)?;
                    self.write_any(val)?;
                }
                Ok(())
            }
            other => self.inner.write_any(other),
        }
    }
}
