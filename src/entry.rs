use crate::prelude::*;

use std::collections::HashMap;

/// Shared state of one config entry.
#[derive(Clone)]
pub struct EntryData {
    pub inverter: Arc<dyn Inverter>,
    pub device_info: DeviceInfo,
}

impl EntryData {
    pub fn new(inverter: Arc<dyn Inverter>, device_info: DeviceInfo) -> Self {
        Self {
            inverter,
            device_info,
        }
    }
}

impl std::fmt::Debug for EntryData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryData")
            .field("serial_number", &self.inverter.serial_number())
            .field("device_info", &self.device_info)
            .finish()
    }
}

/// Per-entry shared state, keyed by config entry id.
#[derive(Clone, Debug, Default)]
pub struct EntryStore {
    entries: HashMap<String, EntryData>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry_id: impl Into<String>, data: EntryData) -> Option<EntryData> {
        self.entries.insert(entry_id.into(), data)
    }

    pub fn get(&self, entry_id: &str) -> Result<&EntryData> {
        self.entries
            .get(entry_id)
            .ok_or_else(|| anyhow!("no shared state for config entry {}", entry_id))
    }

    pub fn remove(&mut self, entry_id: &str) -> Option<EntryData> {
        self.entries.remove(entry_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
