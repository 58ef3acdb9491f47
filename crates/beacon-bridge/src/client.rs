//! The analytics client trait — the native SDK collaborator behind the
//! bridge.
//!
//! Semantics (batching, transport, persistence) belong to the
//! implementation; the bridge only forwards the argument values each
//! operation needs. Property payloads cross this boundary as JSON
//! objects.

use serde_json::Value as JsonValue;

/// A JSON property payload.
pub type Properties = serde_json::Map<String, JsonValue>;

pub trait AnalyticsClient {
    /// Creates/attaches the underlying client instance and returns an
    /// identifier for it.
    fn initialize(
        &mut self,
        token: &str,
        track_automatic_events: bool,
        opt_out_tracking_default: bool,
        super_properties: Properties,
    ) -> String;

    fn set_server_url(&mut self, server_url: &str);
    fn set_logging_enabled(&mut self, enabled: bool);
    fn set_use_ip_address_for_geolocation(&mut self, enabled: bool);
    fn set_flush_batch_size(&mut self, size: i32);

    fn has_opted_out_tracking(&self) -> bool;
    fn opt_in_tracking(&mut self, properties: Properties);
    fn opt_out_tracking(&mut self);

    fn identify(&mut self, distinct_id: &str);
    fn alias(&mut self, alias: &str, distinct_id: &str);
    fn track(&mut self, event_name: &str, properties: Properties);
    fn track_with_groups(&mut self, event_name: &str, properties: Properties, groups: Properties);

    fn set_group(&mut self, group_key: &str, group_id: JsonValue);
    fn add_group(&mut self, group_key: &str, group_id: JsonValue);
    fn remove_group(&mut self, group_key: &str, group_id: JsonValue);
    fn delete_group(&mut self, group_key: &str, group_id: JsonValue);

    fn register_super_properties(&mut self, properties: Properties);
    fn register_super_properties_once(&mut self, properties: Properties);
    fn unregister_super_property(&mut self, property_name: &str);
    fn super_properties(&self) -> Properties;
    fn clear_super_properties(&mut self);

    fn time_event(&mut self, event_name: &str);
    fn event_elapsed_time(&self, event_name: &str) -> f64;

    fn reset(&mut self);
    fn distinct_id(&self) -> String;
    fn flush(&mut self);

    // User profile operations.
    fn people_set(&mut self, properties: Properties);
    fn people_set_once(&mut self, properties: Properties);
    fn people_increment(&mut self, properties: Properties);
    fn people_append(&mut self, name: &str, value: JsonValue);
    fn people_union(&mut self, name: &str, values: Vec<JsonValue>);
    fn people_remove(&mut self, name: &str, value: JsonValue);
    fn people_unset(&mut self, name: &str);
    fn people_track_charge(&mut self, amount: f64, properties: Properties);
    fn people_clear_charges(&mut self);
    fn people_delete_user(&mut self);

    // Group profile operations.
    fn group_set(&mut self, group_key: &str, group_id: JsonValue, properties: Properties);
    fn group_set_once(&mut self, group_key: &str, group_id: JsonValue, properties: Properties);
    fn group_unset(&mut self, group_key: &str, group_id: JsonValue, property_name: &str);
    fn group_remove(&mut self, group_key: &str, group_id: JsonValue, name: &str, value: JsonValue);
    fn group_union(
        &mut self,
        group_key: &str,
        group_id: JsonValue,
        name: &str,
        values: Vec<JsonValue>,
    );
}
