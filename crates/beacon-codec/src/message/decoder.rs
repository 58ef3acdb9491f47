//! `MessageDecoder` — extended channel decoder.

use url::Url;

use super::constants::*;
use crate::standard::{CodecError, StandardDecoder};
use crate::Value;

/// Extended decoder: intercepts the extension tags (and the container
/// tags, so nested extension values decode through the extended
/// dispatch) and delegates every base tag to the inner decoder.
pub struct MessageDecoder<'a> {
    pub inner: StandardDecoder<'a>,
}

impl<'a> MessageDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            inner: StandardDecoder::new(data),
        }
    }

    pub fn read_any(&mut self) -> Result<Value, CodecError> {
        let tag = self.inner.reader.try_u8()?;
        self.read_value_of_tag(tag)
    }

    pub fn read_value_of_tag(&mut self, tag: u8) -> Result<Value, CodecError> {
        match tag {
            TAG_DATE_TIME => Ok(Value::Timestamp(self.inner.reader.try_i64()?)),
            TAG_URI => {
                let size = self.inner.read_size()?;
                // The declared payload is consumed in full before syntax
                // validation, so a bad identifier leaves the cursor on the
                // next value instead of corrupting the rest of the stream.
                let bytes = self.inner.reader.try_buf(size)?;
                match std::str::from_utf8(bytes).ok().and_then(|s| Url::parse(s).ok()) {
                    Some(url) => Ok(Value::Uri(url)),
                    None => Ok(Value::Undefined),
                }
            }
            crate::standard::constants::TAG_LIST => {
                let count = self.inner.read_size()?;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(self.read_any()?);
                }
                Ok(Value::List(items))
            }
            crate::standard::constants::TAG_MAP => {
                let count = self.inner.read_size()?;
                let mut pairs = Vec::with_capacity(count);
                for _ in 0..count {
                    let key = self.read_any()?;
                    let val = self.read_any()?;
                    pairs.push((key, val));
                }
                Ok(Value::Map(pairs))
            }
            _ => self.inner.read_value_of_tag(tag),
        }
    }
}
