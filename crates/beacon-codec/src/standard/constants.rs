//! Type-tag bytes of the base wire format.
//!
//! These values are a fixed external contract; the extension layer
//! reserves its own tags above this range and never redefines these.

pub const TAG_NULL: u8 = 0;
pub const TAG_TRUE: u8 = 1;
pub const TAG_FALSE: u8 = 2;
pub const TAG_INT32: u8 = 3;
pub const TAG_INT64: u8 = 4;
pub const TAG_LARGE_INT: u8 = 5;
pub const TAG_FLOAT64: u8 = 6;
pub const TAG_STRING: u8 = 7;
pub const TAG_UINT8_LIST: u8 = 8;
pub const TAG_INT32_LIST: u8 = 9;
pub const TAG_INT64_LIST: u8 = 10;
pub const TAG_FLOAT64_LIST: u8 = 11;
pub const TAG_LIST: u8 = 12;
pub const TAG_MAP: u8 = 13;

/// Size-prefix escape for 16-bit lengths.
pub const SIZE_U16: u8 = 254;
/// Size-prefix escape for 32-bit lengths.
pub const SIZE_U32: u8 = 255;
