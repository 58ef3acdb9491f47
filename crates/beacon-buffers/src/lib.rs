//! Binary buffer primitives for the beacon channel codec.
//!
//! The channel wire format is little-endian throughout and pads some
//! payloads to 4- or 8-byte boundaries, so both the [`Writer`] and the
//! [`Reader`] carry alignment helpers alongside the usual scalar
//! accessors.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
