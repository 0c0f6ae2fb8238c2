use serde::{Deserialize, Serialize};

/// Device registry record an entity binds itself to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// (domain, id) pairs identifying the device.
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,
}

impl DeviceInfo {
    pub fn new(serial_number: &str, name: impl Into<String>) -> Self {
        Self {
            identifiers: vec![(crate::DOMAIN.to_string(), serial_number.to_string())],
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_sw_version(mut self, sw_version: impl Into<String>) -> Self {
        self.sw_version = Some(sw_version.into());
        self
    }
}
