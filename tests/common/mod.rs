#![allow(dead_code)]

use goodwe_switch::prelude::*;
use goodwe_switch::inverter::SettingValue;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub const SERIAL: &str = "9010KETU000W0000";
pub const ENTRY_ID: &str = "entry-1";

pub fn common_setup() {
    goodwe_switch::logging::init("debug");
}

/// Scripted reply for one inverter call.
#[derive(Clone, Copy, Debug)]
pub enum Reply {
    Value(SettingValue),
    Communication,
    InvalidValue,
    Fatal,
}

impl Reply {
    fn into_error(self, setting_id: &str) -> InverterError {
        match self {
            Reply::Value(_) => unreachable!("not an error reply"),
            Reply::Communication => InverterError::Communication(format!("no response for {}", setting_id)),
            Reply::InvalidValue => InverterError::InvalidValue(format!("garbage for {}", setting_id)),
            Reply::Fatal => InverterError::Other(anyhow!("client crashed reading {}", setting_id)),
        }
    }
}

// MockInverter {{{
pub struct MockInverter {
    serial: String,
    reads: Mutex<HashMap<String, Reply>>,
    read_counts: Mutex<HashMap<String, usize>>,
    write_reply: Mutex<Option<Reply>>,
    writes: Mutex<Vec<(String, SettingValue)>>,
}

impl MockInverter {
    pub fn new(serial: &str) -> Self {
        Self {
            serial: serial.to_string(),
            reads: Mutex::new(HashMap::new()),
            read_counts: Mutex::new(HashMap::new()),
            write_reply: Mutex::new(None),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_read(self, setting_id: &str, reply: Reply) -> Self {
        self.set_read(setting_id, reply);
        self
    }

    pub fn set_read(&self, setting_id: &str, reply: Reply) {
        self.reads.lock().unwrap().insert(setting_id.to_string(), reply);
    }

    /// Makes every following write fail with `reply`.
    pub fn fail_writes(&self, reply: Reply) {
        *self.write_reply.lock().unwrap() = Some(reply);
    }

    pub fn writes(&self) -> Vec<(String, SettingValue)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn read_count(&self, setting_id: &str) -> usize {
        self.read_counts.lock().unwrap().get(setting_id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl Inverter for MockInverter {
    fn serial_number(&self) -> &str {
        &self.serial
    }

    async fn read_setting(&self, setting_id: &str) -> Result<SettingValue, InverterError> {
        *self.read_counts.lock().unwrap().entry(setting_id.to_string()).or_default() += 1;

        // settings nobody scripted behave like a model without them
        let reply = self
            .reads
            .lock()
            .unwrap()
            .get(setting_id)
            .copied()
            .unwrap_or(Reply::Communication);

        match reply {
            Reply::Value(value) => Ok(value),
            other => Err(other.into_error(setting_id)),
        }
    }

    async fn write_setting(&self, setting_id: &str, value: SettingValue) -> Result<(), InverterError> {
        if let Some(reply) = *self.write_reply.lock().unwrap() {
            return Err(reply.into_error(setting_id));
        }

        self.writes.lock().unwrap().push((setting_id.to_string(), value));
        Ok(())
    }
} // }}}

// RecordingHost {{{
#[derive(Default)]
pub struct RecordingHost {
    added: Mutex<Vec<Vec<InverterSwitch>>>,
    updates: Mutex<Vec<(String, bool)>>,
}

impl RecordingHost {
    pub fn add_calls(&self) -> usize {
        self.added.lock().unwrap().len()
    }

    /// Every entity handed over so far, in registration order.
    pub fn take_entities(&self) -> Vec<InverterSwitch> {
        self.added.lock().unwrap().drain(..).flatten().collect()
    }

    pub fn updates(&self) -> Vec<(String, bool)> {
        self.updates.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn add_entities(&self, entities: Vec<InverterSwitch>) {
        self.added.lock().unwrap().push(entities);
    }

    fn schedule_update(&self, unique_id: &str, force_refresh: bool) {
        self.updates.lock().unwrap().push((unique_id.to_string(), force_refresh));
    }
} // }}}

pub struct Factory();
impl Factory {
    pub fn inverter() -> MockInverter {
        MockInverter::new(SERIAL)
    }

    pub fn device_info() -> DeviceInfo {
        DeviceInfo::new(SERIAL, "GW10K-ET")
            .with_manufacturer("GoodWe")
            .with_model("GW10K-ET")
            .with_sw_version("04029-19-S11")
    }

    pub fn host() -> Arc<RecordingHost> {
        Arc::new(RecordingHost::default())
    }

    pub fn store(inverter: Arc<MockInverter>) -> EntryStore {
        let mut store = EntryStore::new();
        store.insert(ENTRY_ID, EntryData::new(inverter, Self::device_info()));
        store
    }

    pub fn switch(
        setting_id: &str,
        inverter: Arc<MockInverter>,
        host: Arc<RecordingHost>,
        is_on: bool,
    ) -> InverterSwitch {
        let description = settings::find(setting_id).expect("known setting");
        InverterSwitch::new(description, Self::device_info(), inverter, host, is_on)
    }
}
