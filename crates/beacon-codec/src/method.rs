//! Method-call and result-envelope codec for the channel's
//! request/reply traffic, layered on the extended message codec.
//!
//! A method call is the method name (as a string value) followed by the
//! argument value, in one buffer. A reply is an envelope: `0` + result
//! value on success, `1` + code + message + details on error, and an
//! empty reply when the method is not implemented on this side. Payload
//! alignment is measured across the whole buffer, envelope byte included.

use crate::message::{MessageDecoder, MessageEncoder};
use crate::standard::constants::TAG_STRING;
use crate::standard::CodecError;
use crate::Value;

const ENVELOPE_SUCCESS: u8 = 0;
const ENVELOPE_ERROR: u8 = 1;

/// A named call arriving over the channel.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of a dispatched call, as it crosses the channel back.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    /// Encoded as an empty reply.
    NotImplemented,
}

pub fn encode_method_call(call: &MethodCall) -> Result<Vec<u8>, CodecError> {
    let mut encoder = MessageEncoder::new();
    encoder.inner.write_str(&call.method);
    encoder.write_any(&call.args)?;
    Ok(encoder.inner.writer.flush())
}

pub fn decode_method_call(blob: &[u8]) -> Result<MethodCall, CodecError> {
    let mut decoder = MessageDecoder::new(blob);
    if decoder.inner.reader.try_u8()? != TAG_STRING {
        return Err(CodecError::MalformedEnvelope);
    }
    let size = decoder.inner.read_size()?;
    let method = decoder.inner.reader.try_utf8(size)?.to_string();
    let args = decoder.read_any()?;
    Ok(MethodCall { method, args })
}

pub fn encode_envelope(result: &MethodResult) -> Result<Vec<u8>, CodecError> {
    match result {
        MethodResult::NotImplemented => Ok(Vec::new()),
        MethodResult::Success(value) => {
            let mut encoder = MessageEncoder::new();
            encoder.inner.writer.u8(ENVELOPE_SUCCESS);
            encoder.write_any(value)?;
            Ok(encoder.inner.writer.flush())
        }
        MethodResult::Error {
            code,
            message,
            details,
        } => {
            let mut encoder = MessageEncoder::new();
            encoder.inner.writer.u8(ENVELOPE_ERROR);
            encoder.inner.write_str(code);
            match message {
                Some(text) => encoder.inner.write_str(text),
                None => encoder.write_any(&Value::Null)?,
            }
            encoder.write_any(details)?;
            Ok(encoder.inner.writer.flush())
        }
    }
}

pub fn decode_envelope(blob: &[u8]) -> Result<MethodResult, CodecError> {
    if blob.is_empty() {
        return Ok(MethodResult::NotImplemented);
    }
    let mut decoder = MessageDecoder::new(blob);
    match decoder.inner.reader.try_u8()? {
        ENVELOPE_SUCCESS => Ok(MethodResult::Success(decoder.read_any()?)),
        ENVELOPE_ERROR => {
            let code = match decoder.read_any()? {
                Value::Str(code) => code,
                _ => return Err(CodecError::MalformedEnvelope),
            };
            let message = match decoder.read_any()? {
                Value::Str(text) => Some(text),
                Value::Null => None,
                _ => return Err(CodecError::MalformedEnvelope),
            };
            let details = decoder.read_any()?;
            Ok(MethodResult::Error {
                code,
                message,
                details,
            })
        }
        _ => Err(CodecError::MalformedEnvelope),
    }
}
