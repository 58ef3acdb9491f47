//! `StandardDecoder` — base wire format decoder.

use beacon_buffers::Reader;

use super::constants::*;
use super::error::CodecError;
use crate::Value;

/// Decoder for the base tagged-union format.
///
/// Holds a bounds-checked cursor over the input; every read propagates
/// [`CodecError::TruncatedBuffer`] when the declared payload runs past
/// the end. Tags outside the base range are [`CodecError::UnknownTag`] —
/// the extension layer intercepts its own tags before delegating here.
pub struct StandardDecoder<'a> {
    pub reader: Reader<'a>,
}

impl<'a> StandardDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    pub fn read_any(&mut self) -> Result<Value, CodecError> {
        let tag = self.reader.try_u8()?;
        self.read_value_of_tag(tag)
    }

    pub fn read_value_of_tag(&mut self, tag: u8) -> Result<Value, CodecError> {
        match tag {
            TAG_NULL => Ok(Value::Null),
            TAG_TRUE => Ok(Value::Bool(true)),
            TAG_FALSE => Ok(Value::Bool(false)),
            TAG_INT32 => Ok(Value::Int32(self.reader.try_i32()?)),
            TAG_INT64 => Ok(Value::Int64(self.reader.try_i64()?)),
            TAG_LARGE_INT => {
                let size = self.read_size()?;
                let hex = self.reader.try_utf8(size)?;
                Ok(Value::LargeInt(hex.to_string()))
            }
            TAG_FLOAT64 => {
                self.reader.align(8);
                Ok(Value::Float64(self.reader.try_f64()?))
            }
            TAG_STRING => {
                let size = self.read_size()?;
                let s = self.reader.try_utf8(size)?;
                Ok(Value::Str(s.to_string()))
            }
            TAG_UINT8_LIST => {
                let size = self.read_size()?;
                Ok(Value::Bytes(self.reader.try_buf(size)?.to_vec()))
            }
            TAG_INT32_LIST => {
                let count = self.read_size()?;
                self.reader.align(4);
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(self.reader.try_i32()?);
                }
                Ok(Value::Int32List(values))
            }
            TAG_INT64_LIST => {
                let count = self.read_size()?;
                self.reader.align(8);
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(self.reader.try_i64()?);
                }
                Ok(Value::Int64List(values))
            }
            TAG_FLOAT64_LIST => {
                let count = self.read_size()?;
                self.reader.align(8);
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(self.reader.try_f64()?);
                }
                Ok(Value::Float64List(values))
            }
            TAG_LIST => {
                let count = self.read_size()?;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(self.read_any()?);
                }
                Ok(Value::List(items))
            }
            TAG_MAP => {
                let count = self.read_size()?;
                let mut pairs = Vec::with_capacity(count);
                for _ in 0..count {
                    let key = self.read_any()?;
                    let val = self.read_any()?;
                    pairs.push((key, val));
                }
                Ok(Value::Map(pairs))
            }
            _ => Err(CodecError::UnknownTag {
                tag,
                offset: self.reader.x - 1,
            }),
        }
    }

    /// Reads the shared variable-length size prefix.
    pub fn read_size(&mut self) -> Result<usize, CodecError> {
        match self.reader.try_u8()? {
            SIZE_U16 => Ok(self.reader.try_u16()? as usize),
            SIZE_U32 => Ok(self.reader.try_u32()? as usize),
            n => Ok(n as usize),
        }
    }
}
