//! String-named call dispatch onto the analytics client.

use beacon_codec::{MethodCall, MethodResult, Value};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::args;
use crate::client::{AnalyticsClient, Properties};
use crate::error::BridgeError;
use crate::helper;

/// Error code carried in error envelopes produced by the bridge.
pub const ERROR_CODE: &str = "AnalyticsBridgeException";

/// Dispatches decoded channel calls onto an [`AnalyticsClient`].
///
/// `initialize` captures the runtime's library properties (library name,
/// version) from the call; every subsequent property-carrying call has
/// them merged in before reaching the client.
pub struct Bridge<C> {
    client: C,
    library_properties: Properties,
}

impl<C: AnalyticsClient> Bridge<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            library_properties: Properties::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Handles one channel call, mapping handler faults to an error
    /// envelope and unknown method names to the not-implemented reply.
    pub fn handle(&mut self, call: &MethodCall) -> MethodResult {
        debug!(method = %call.method, "dispatching channel call");
        let args = &call.args;
        let outcome = match call.method.as_str() {
            "initialize" => self.handle_initialize(args),
            "setServerURL" => self.handle_set_server_url(args),
            "setLoggingEnabled" => self.handle_set_logging_enabled(args),
            "setUseIpAddressForGeolocation" => self.handle_set_use_ip_for_geolocation(args),
            "setFlushBatchSize" => self.handle_set_flush_batch_size(args),
            "hasOptedOutTracking" => self.handle_has_opted_out_tracking(),
            "optInTracking" => self.handle_opt_in_tracking(),
            "optOutTracking" => self.handle_opt_out_tracking(),
            "identify" => self.handle_identify(args),
            "alias" => self.handle_alias(args),
            "track" => self.handle_track(args),
            "trackWithGroups" => self.handle_track_with_groups(args),
            "setGroup" => self.handle_set_group(args),
            "addGroup" => self.handle_add_group(args),
            "removeGroup" => self.handle_remove_group(args),
            "deleteGroup" => self.handle_delete_group(args),
            "registerSuperProperties" => self.handle_register_super_properties(args),
            "registerSuperPropertiesOnce" => self.handle_register_super_properties_once(args),
            "unregisterSuperProperty" => self.handle_unregister_super_property(args),
            "getSuperProperties" => self.handle_get_super_properties(),
            "clearSuperProperties" => self.handle_clear_super_properties(),
            "timeEvent" => self.handle_time_event(args),
            "eventElapsedTime" => self.handle_event_elapsed_time(args),
            "reset" => self.handle_reset(),
            "getDistinctId" => self.handle_get_distinct_id(),
            "flush" => self.handle_flush(),
            "set" => self.handle_people_set(args),
            "setOnce" => self.handle_people_set_once(args),
            "increment" => self.handle_people_increment(args),
            "append" => self.handle_people_append(args),
            "union" => self.handle_people_union(args),
            "remove" => self.handle_people_remove(args),
            "unset" => self.handle_people_unset(args),
            "trackCharge" => self.handle_track_charge(args),
            "clearCharges" => self.handle_clear_charges(),
            "deleteUser" => self.handle_delete_user(),
            "groupSetProperties" => self.handle_group_set_properties(args),
            "groupSetPropertyOnce" => self.handle_group_set_property_once(args),
            "groupUnsetProperty" => self.handle_group_unset_property(args),
            "groupRemovePropertyValue" => self.handle_group_remove_property_value(args),
            "groupUnionProperty" => self.handle_group_union_property(args),
            _ => {
                debug!(method = %call.method, "method not implemented");
                return MethodResult::NotImplemented;
            }
        };
        match outcome {
            Ok(value) => MethodResult::Success(value),
            Err(err) => {
                warn!(method = %call.method, error = %err, "channel call failed");
                MethodResult::Error {
                    code: ERROR_CODE.to_string(),
                    message: Some(err.to_string()),
                    details: Value::Null,
                }
            }
        }
    }

    /// The call's `properties` map (empty when absent) with the library
    /// properties merged in.
    fn merged_call_properties(&self, args: &Value) -> Result<Properties, BridgeError> {
        let properties = args::object_or_empty(args, "properties")?;
        Ok(helper::merged_properties(properties, &self.library_properties))
    }

    fn handle_initialize(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let token = args::string(args, "token").map_err(|_| BridgeError::TokenNotSet)?;
        self.library_properties = args::object_or_empty(args, "libraryProperties")?;
        let super_properties = args::object_or_empty(args, "superProperties")?;
        let merged = helper::merged_properties(super_properties, &self.library_properties);
        let opt_out_default = args::boolean_or(args, "optOutTrackingDefault", false)?;
        let track_automatic_events = args::boolean_or(args, "trackAutomaticEvents", false)?;
        let instance = self
            .client
            .initialize(&token, track_automatic_events, opt_out_default, merged);
        Ok(Value::Str(instance))
    }

    fn handle_set_server_url(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let server_url = args::string(args, "serverURL")?;
        self.client.set_server_url(&server_url);
        Ok(Value::Null)
    }

    fn handle_set_logging_enabled(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let enabled = args::boolean(args, "loggingEnabled")?;
        self.client.set_logging_enabled(enabled);
        Ok(Value::Null)
    }

    fn handle_set_use_ip_for_geolocation(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let enabled = args::boolean(args, "useIpAddressForGeolocation")?;
        self.client.set_use_ip_address_for_geolocation(enabled);
        Ok(Value::Null)
    }

    fn handle_set_flush_batch_size(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let size = args::int32(args, "flushBatchSize")?;
        self.client.set_flush_batch_size(size);
        Ok(Value::Null)
    }

    fn handle_has_opted_out_tracking(&mut self) -> Result<Value, BridgeError> {
        Ok(Value::Bool(self.client.has_opted_out_tracking()))
    }

    fn handle_opt_in_tracking(&mut self) -> Result<Value, BridgeError> {
        self.client.opt_in_tracking(self.library_properties.clone());
        Ok(Value::Null)
    }

    fn handle_opt_out_tracking(&mut self) -> Result<Value, BridgeError> {
        self.client.opt_out_tracking();
        Ok(Value::Null)
    }

    fn handle_identify(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let distinct_id = args::string(args, "distinctId")?;
        self.client.identify(&distinct_id);
        Ok(Value::Null)
    }

    fn handle_alias(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let alias = args::string(args, "alias")?;
        let distinct_id = args::string(args, "distinctId")?;
        self.client.alias(&alias, &distinct_id);
        Ok(Value::Null)
    }

    fn handle_track(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let event_name = args::string(args, "eventName")?;
        let properties = self.merged_call_properties(args)?;
        self.client.track(&event_name, properties);
        Ok(Value::Null)
    }

    fn handle_track_with_groups(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let event_name = args::string(args, "eventName")?;
        let properties = args::object_or_empty(args, "properties")?;
        let groups = args::object_or_empty(args, "groups")?;
        self.client.track_with_groups(&event_name, properties, groups);
        Ok(Value::Null)
    }

    fn group_key_and_id(args: &Value) -> Result<(String, JsonValue), BridgeError> {
        let group_key = args::string(args, "groupKey")?;
        let group_id = args::json(args, "groupID");
        Ok((group_key, group_id))
    }

    fn handle_set_group(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        self.client.set_group(&group_key, group_id);
        Ok(Value::Null)
    }

    fn handle_add_group(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        self.client.add_group(&group_key, group_id);
        Ok(Value::Null)
    }

    fn handle_remove_group(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        self.client.remove_group(&group_key, group_id);
        Ok(Value::Null)
    }

    fn handle_delete_group(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        self.client.delete_group(&group_key, group_id);
        Ok(Value::Null)
    }

    fn handle_register_super_properties(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let properties = self.merged_call_properties(args)?;
        self.client.register_super_properties(properties);
        Ok(Value::Null)
    }

    fn handle_register_super_properties_once(
        &mut self,
        args: &Value,
    ) -> Result<Value, BridgeError> {
        let properties = self.merged_call_properties(args)?;
        self.client.register_super_properties_once(properties);
        Ok(Value::Null)
    }

    fn handle_unregister_super_property(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let property_name = args::string(args, "propertyName")?;
        self.client.unregister_super_property(&property_name);
        Ok(Value::Null)
    }

    fn handle_get_super_properties(&mut self) -> Result<Value, BridgeError> {
        let properties = self.client.super_properties();
        Ok(Value::from(JsonValue::Object(properties)))
    }

    fn handle_clear_super_properties(&mut self) -> Result<Value, BridgeError> {
        self.client.clear_super_properties();
        Ok(Value::Null)
    }

    fn handle_time_event(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let event_name = args::string(args, "eventName")?;
        self.client.time_event(&event_name);
        Ok(Value::Null)
    }

    fn handle_event_elapsed_time(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let event_name = args::string(args, "eventName")?;
        Ok(Value::Float64(self.client.event_elapsed_time(&event_name)))
    }

    fn handle_reset(&mut self) -> Result<Value, BridgeError> {
        self.client.reset();
        Ok(Value::Null)
    }

    fn handle_get_distinct_id(&mut self) -> Result<Value, BridgeError> {
        Ok(Value::Str(self.client.distinct_id()))
    }

    fn handle_flush(&mut self) -> Result<Value, BridgeError> {
        self.client.flush();
        Ok(Value::Null)
    }

    fn handle_people_set(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let properties = self.merged_call_properties(args)?;
        self.client.people_set(properties);
        Ok(Value::Null)
    }

    fn handle_people_set_once(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let properties = self.merged_call_properties(args)?;
        self.client.people_set_once(properties);
        Ok(Value::Null)
    }

    fn handle_people_increment(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let properties = args::object_or_empty(args, "properties")?;
        self.client.people_increment(properties);
        Ok(Value::Null)
    }

    fn handle_people_append(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let name = args::string(args, "name")?;
        let value = args::json(args, "value");
        self.client.people_append(&name, value);
        Ok(Value::Null)
    }

    fn handle_people_union(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let name = args::string(args, "name")?;
        let values = args::array(args, "value")?;
        self.client.people_union(&name, values);
        Ok(Value::Null)
    }

    fn handle_people_remove(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let name = args::string(args, "name")?;
        let value = args::json(args, "value");
        self.client.people_remove(&name, value);
        Ok(Value::Null)
    }

    fn handle_people_unset(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let name = args::string(args, "name")?;
        self.client.people_unset(&name);
        Ok(Value::Null)
    }

    fn handle_track_charge(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let amount = args::float64(args, "amount")?;
        let properties = self.merged_call_properties(args)?;
        self.client.people_track_charge(amount, properties);
        Ok(Value::Null)
    }

    fn handle_clear_charges(&mut self) -> Result<Value, BridgeError> {
        self.client.people_clear_charges();
        Ok(Value::Null)
    }

    fn handle_delete_user(&mut self) -> Result<Value, BridgeError> {
        self.client.people_delete_user();
        Ok(Value::Null)
    }

    fn handle_group_set_properties(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        let properties = args::object_or_empty(args, "properties")?;
        self.client.group_set(&group_key, group_id, properties);
        Ok(Value::Null)
    }

    fn handle_group_set_property_once(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        let properties = args::object_or_empty(args, "properties")?;
        self.client.group_set_once(&group_key, group_id, properties);
        Ok(Value::Null)
    }

    fn handle_group_unset_property(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        let property_name = args::string(args, "propertyName")?;
        self.client.group_unset(&group_key, group_id, &property_name);
        Ok(Value::Null)
    }

    fn handle_group_remove_property_value(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        let name = args::string(args, "name")?;
        let value = args::json(args, "value");
        self.client.group_remove(&group_key, group_id, &name, value);
        Ok(Value::Null)
    }

    fn handle_group_union_property(&mut self, args: &Value) -> Result<Value, BridgeError> {
        let (group_key, group_id) = Self::group_key_and_id(args)?;
        let name = args::string(args, "name")?;
        let values = args::array(args, "value")?;
        self.client.group_union(&group_key, group_id, &name, values);
        Ok(Value::Null)
    }
}
