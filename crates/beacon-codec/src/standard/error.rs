use beacon_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value has no representation in the target format. Fatal to the
    /// encode call.
    #[error("unsupported value type: {0}")]
    UnsupportedType(&'static str),
    /// The buffer ended before a tag's declared payload. Fatal to the
    /// decode call.
    #[error("unexpected end of buffer")]
    TruncatedBuffer,
    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,
    #[error("unknown type tag {tag} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },
    #[error("malformed method-call envelope")]
    MalformedEnvelope,
}

impl From<BufferError> for CodecError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => CodecError::TruncatedBuffer,
            BufferError::InvalidUtf8 => CodecError::InvalidUtf8,
        }
    }
}
