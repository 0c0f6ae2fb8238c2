use crate::prelude::*;

/// A request to flip one switch on one inverter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCommand {
    pub serial: String,
    pub key: String,
    pub on: bool,
}

impl SwitchCommand {
    pub async fn apply(&self, entities: &[InverterSwitch]) -> Result<()> {
        let entity = entities
            .iter()
            .find(|e| e.serial_number() == self.serial && e.key() == self.key)
            .ok_or_else(|| anyhow!("no switch {} on inverter {}", self.key, self.serial))?;

        info!("setting {} on {} to {}", self.key, self.serial, if self.on { "on" } else { "off" });

        if self.on {
            entity.turn_on().await
        } else {
            entity.turn_off().await
        }
    }
}
