use serde::Serialize;

// EntityCategory {{{
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    /// Changes device configuration rather than reporting a measurement.
    Config,
    Diagnostic,
}

impl EntityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Diagnostic => "diagnostic",
        }
    }
} // }}}

// SwitchDeviceClass {{{
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchDeviceClass {
    Outlet,
    Switch,
}

impl SwitchDeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outlet => "outlet",
            Self::Switch => "switch",
        }
    }
} // }}}

/// Static description of one switchable inverter setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchDescription {
    /// Name the inverter client knows the setting by.
    pub setting_id: &'static str,
    /// Entity key, used to build the unique id.
    pub key: &'static str,
    pub translation_key: &'static str,
    pub has_entity_name: bool,
    pub entity_category: EntityCategory,
    pub device_class: SwitchDeviceClass,
}

/// Every switch we know how to expose, in probe order.
pub const SWITCHES: &[SwitchDescription] = &[
    SwitchDescription {
        setting_id: "load_control_switch",
        key: "load_control",
        translation_key: "load_control",
        has_entity_name: true,
        entity_category: EntityCategory::Config,
        device_class: SwitchDeviceClass::Outlet,
    },
    SwitchDescription {
        setting_id: "grid_export",
        key: "grid_export",
        translation_key: "grid_export",
        has_entity_name: true,
        entity_category: EntityCategory::Config,
        device_class: SwitchDeviceClass::Outlet,
    },
];

pub fn find(setting_id: &str) -> Option<&'static SwitchDescription> {
    SWITCHES.iter().find(|d| d.setting_id == setting_id)
}

pub fn find_by_key(key: &str) -> Option<&'static SwitchDescription> {
    SWITCHES.iter().find(|d| d.key == key)
}
