pub use anyhow::{anyhow, bail, Error, Result};
pub use log::{debug, error, info, trace, warn};

pub use std::sync::Arc;

pub use crate::config::{self, Config};
pub use crate::device::DeviceInfo;
pub use crate::entry::{EntryData, EntryStore};
pub use crate::error::InverterError;
pub use crate::host::Host;
pub use crate::inverter::Inverter;
pub use crate::settings::{self, SwitchDescription};
pub use crate::switch::InverterSwitch;
pub use crate::{home_assistant, mqtt, platform};
pub use crate::DOMAIN;
