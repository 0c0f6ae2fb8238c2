use crate::inverter::{self, SettingValue};
use crate::prelude::*;
use crate::settings::SWITCHES;

/// Outcome of the initial read of a setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Supported(SettingValue),
    /// The connected model does not expose this setting.
    Unsupported,
}

/// Reads `setting_id` once to find out whether this inverter model has it.
///
/// Communication and value errors mean "unsupported"; anything else is
/// returned as an error.
pub async fn probe(inverter: &dyn Inverter, setting_id: &str) -> Result<Probe> {
    match inverter.read_setting(setting_id).await {
        Ok(value) => Ok(Probe::Supported(value)),
        Err(err) if err.is_unsupported() => {
            debug!("Could not read inverter setting {}: {}", setting_id, err);
            Ok(Probe::Unsupported)
        }
        Err(err) => Err(anyhow!(err).context(format!("probing setting {}", setting_id))),
    }
}

/// Builds a switch for every setting the entry's inverter supports and hands
/// them to the host. Returns the number of entities registered.
pub async fn setup_entry(store: &EntryStore, entry_id: &str, host: Arc<dyn Host>) -> Result<usize> {
    let entry = store.get(entry_id)?;
    let inverter = entry.inverter.clone();

    let mut entities = Vec::new();

    for description in SWITCHES {
        let value = match probe(inverter.as_ref(), description.setting_id).await? {
            Probe::Supported(value) => value,
            Probe::Unsupported => continue,
        };

        entities.push(InverterSwitch::new(
            description,
            entry.device_info.clone(),
            inverter.clone(),
            host.clone(),
            inverter::is_on(value),
        ));
    }

    let count = entities.len();
    info!(
        "inverter {}: {} of {} switches supported",
        inverter.serial_number(),
        count,
        SWITCHES.len()
    );

    if !entities.is_empty() {
        host.add_entities(entities);
    }

    Ok(count)
}

/// Drops the entry's shared state. Returns false if the entry was unknown.
pub fn unload_entry(store: &mut EntryStore, entry_id: &str) -> bool {
    match store.remove(entry_id) {
        Some(entry) => {
            info!("unloaded config entry {} (inverter {})", entry_id, entry.inverter.serial_number());
            true
        }
        None => {
            warn!("unload requested for unknown config entry {}", entry_id);
            false
        }
    }
}
