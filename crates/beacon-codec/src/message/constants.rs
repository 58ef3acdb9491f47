//! Extension type-tag bytes, reserved above the base format's range.

/// Absolute timestamp: 8 payload bytes, signed 64-bit little-endian
/// millisecond count since the Unix epoch.
pub const TAG_DATE_TIME: u8 = 128;

/// Resource identifier: size-prefixed UTF-8 string in generic URI syntax.
pub const TAG_URI: u8 = 129;
