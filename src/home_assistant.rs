use crate::mqtt::{self, Message};
use crate::prelude::*;
use crate::settings::{EntityCategory, SwitchDeviceClass};

use serde::Serialize;

#[derive(Debug, Serialize)]
struct Device<'a> {
    identifiers: Vec<String>,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacturer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sw_version: Option<&'a str>,
}

impl<'a> From<&'a DeviceInfo> for Device<'a> {
    fn from(info: &'a DeviceInfo) -> Self {
        Self {
            identifiers: info
                .identifiers
                .iter()
                .map(|(domain, id)| format!("{}_{}", domain, id))
                .collect(),
            name: &info.name,
            manufacturer: info.manufacturer.as_deref(),
            model: info.model.as_deref(),
            sw_version: info.sw_version.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Switch<'a> {
    unique_id: &'a str,
    object_id: String,
    translation_key: &'a str,
    has_entity_name: bool,
    entity_category: EntityCategory,
    device_class: SwitchDeviceClass,
    state_topic: String,
    command_topic: String,
    payload_on: &'static str,
    payload_off: &'static str,
    state_on: &'static str,
    state_off: &'static str,
    device: Device<'a>,
}

/// Renders MQTT discovery and state messages for switch entities.
pub struct Config<'a> {
    mqtt: &'a config::Mqtt,
}

impl<'a> Config<'a> {
    pub fn new(mqtt: &'a config::Mqtt) -> Self {
        Self { mqtt }
    }

    /// Discovery messages for every entity; empty when discovery is disabled.
    pub fn all(&self, entities: &[InverterSwitch]) -> Result<Vec<Message>> {
        if !self.mqtt.homeassistant().enabled() {
            return Ok(Vec::new());
        }

        entities.iter().map(|entity| self.switch(entity)).collect()
    }

    pub fn switch(&self, entity: &InverterSwitch) -> Result<Message> {
        let namespace = self.mqtt.namespace();

        let config = Switch {
            unique_id: entity.unique_id(),
            object_id: entity.unique_id().replace('-', "_").to_ascii_lowercase(),
            translation_key: entity.translation_key(),
            has_entity_name: entity.has_entity_name(),
            entity_category: entity.entity_category(),
            device_class: entity.device_class(),
            state_topic: mqtt::state_topic(namespace, entity),
            command_topic: mqtt::command_topic(namespace, entity),
            payload_on: mqtt::payload_for(true),
            payload_off: mqtt::payload_for(false),
            state_on: mqtt::payload_for(true),
            state_off: mqtt::payload_for(false),
            device: Device::from(entity.device_info()),
        };

        Ok(Message {
            topic: self.discovery_topic(entity),
            retain: true,
            payload: serde_json::to_string(&config)?,
        })
    }

    pub fn state(&self, entity: &InverterSwitch) -> Message {
        Message::for_state(self.mqtt.namespace(), entity)
    }

    fn discovery_topic(&self, entity: &InverterSwitch) -> String {
        format!("{}/switch/{}/config", self.mqtt.homeassistant().prefix(), entity.unique_id())
    }
}
