use crate::error::InverterError;

use async_trait::async_trait;

/// Raw value of an inverter setting.
pub type SettingValue = i64;

/// Client for a connected inverter.
///
/// The wire protocol lives behind this trait; one handle is shared by every
/// entity of a config entry, so implementations serialise requests themselves.
#[async_trait]
pub trait Inverter: Send + Sync {
    fn serial_number(&self) -> &str;

    async fn read_setting(&self, setting_id: &str) -> Result<SettingValue, InverterError>;

    async fn write_setting(&self, setting_id: &str, value: SettingValue) -> Result<(), InverterError>;
}

/// Only a literal 1 is on; 0, negatives and out-of-range values are all off.
pub fn is_on(value: SettingValue) -> bool {
    value == 1
}
