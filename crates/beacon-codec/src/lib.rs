//! Binary message codec for the beacon platform channel.
//!
//! The [`standard`] module implements the channel's base tagged-union wire
//! format (null, booleans, integers, doubles, strings, typed arrays,
//! lists, maps). The [`message`] module layers two extension tags on top
//! of it — an absolute [`Value::Timestamp`] and a [`Value::Uri`] resource
//! identifier — without altering any base tag semantics. The [`method`]
//! module wraps the message codec into method-call and result-envelope
//! encoding for the channel's request/reply traffic.

mod value;

pub mod message;
pub mod method;
pub mod standard;

pub use url;

pub use message::{MessageDecoder, MessageEncoder};
pub use method::{MethodCall, MethodResult};
pub use standard::{CodecError, StandardDecoder, StandardEncoder};
pub use value::Value;
