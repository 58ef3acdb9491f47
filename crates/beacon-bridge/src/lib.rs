//! Platform-channel bridge for a native analytics client.
//!
//! Decoded [`MethodCall`]s from the channel are dispatched by name onto
//! an [`AnalyticsClient`] implementation: arguments are extracted from
//! the call's map, missing property maps default to empty, and the
//! runtime's library properties (captured at `initialize`) are merged
//! into every property-carrying call before it reaches the client.
//!
//! [`MethodCall`]: beacon_codec::MethodCall

mod args;
mod client;
mod dispatch;
mod error;
mod helper;

pub use client::{AnalyticsClient, Properties};
pub use dispatch::{Bridge, ERROR_CODE};
pub use error::BridgeError;
pub use helper::{merged_properties, to_json_object};
