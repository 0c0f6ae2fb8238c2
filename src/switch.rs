use crate::inverter::{self, SettingValue};
use crate::prelude::*;
use crate::settings::{EntityCategory, SwitchDeviceClass};

/// One inverter setting exposed as an on/off switch.
///
/// The cached state only changes on `update`. Writes ask the host for a
/// forced refresh instead of assuming the inverter accepted the value.
pub struct InverterSwitch {
    description: &'static SwitchDescription,
    unique_id: String,
    device_info: DeviceInfo,
    inverter: Arc<dyn Inverter>,
    host: Arc<dyn Host>,
    is_on: bool,
}

impl InverterSwitch {
    pub fn new(
        description: &'static SwitchDescription,
        device_info: DeviceInfo,
        inverter: Arc<dyn Inverter>,
        host: Arc<dyn Host>,
        is_on: bool,
    ) -> Self {
        let unique_id = unique_id(description, inverter.serial_number());

        Self {
            description,
            unique_id,
            device_info,
            inverter,
            host,
            is_on,
        }
    }

    pub fn setting_id(&self) -> &'static str {
        self.description.setting_id
    }

    pub fn key(&self) -> &'static str {
        self.description.key
    }

    pub fn description(&self) -> &'static SwitchDescription {
        self.description
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn serial_number(&self) -> &str {
        self.inverter.serial_number()
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn translation_key(&self) -> &'static str {
        self.description.translation_key
    }

    pub fn entity_category(&self) -> EntityCategory {
        self.description.entity_category
    }

    pub fn device_class(&self) -> SwitchDeviceClass {
        self.description.device_class
    }

    pub fn has_entity_name(&self) -> bool {
        self.description.has_entity_name
    }

    // the host is told about changes via schedule_update, never by polling
    pub fn should_poll(&self) -> bool {
        false
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub async fn turn_on(&self) -> Result<()> {
        self.write_setting(1).await
    }

    pub async fn turn_off(&self) -> Result<()> {
        self.write_setting(0).await
    }

    /// Re-reads the setting. On error the cached state is left alone.
    pub async fn update(&mut self) -> Result<()> {
        let value = self.inverter.read_setting(self.setting_id()).await?;
        self.is_on = inverter::is_on(value);
        debug!("{} = {} (on: {})", self.setting_id(), value, self.is_on);

        Ok(())
    }

    async fn write_setting(&self, value: SettingValue) -> Result<()> {
        match self.inverter.write_setting(self.setting_id(), value).await {
            Ok(()) => {
                self.host.schedule_update(&self.unique_id, true);
                Ok(())
            }
            Err(err) if err.is_communication() => {
                error!("Error writing setting: {}={}: {}", self.setting_id(), value, err);
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl std::fmt::Debug for InverterSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InverterSwitch")
            .field("unique_id", &self.unique_id)
            .field("setting_id", &self.description.setting_id)
            .field("is_on", &self.is_on)
            .finish()
    }
}

/// `{DOMAIN}-{key}-{serial}`
pub fn unique_id(description: &SwitchDescription, serial_number: &str) -> String {
    format!("{}-{}-{}", DOMAIN, description.key, serial_number)
}
