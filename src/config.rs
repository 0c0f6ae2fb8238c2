use crate::prelude::*;

use serde::Deserialize;
use std::str::FromStr;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_loglevel")]
    pub loglevel: String,

    #[serde(default = "Config::default_mqtt")]
    pub mqtt: Mqtt,
}

// HomeAssistant {{{
#[derive(Clone, Debug, Deserialize)]
pub struct HomeAssistant {
    #[serde(default = "Config::default_enabled")]
    pub enabled: bool,

    #[serde(default = "Config::default_mqtt_homeassistant_prefix")]
    pub prefix: String,
}

impl HomeAssistant {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
} // }}}

// Mqtt {{{
#[derive(Clone, Debug, Deserialize)]
pub struct Mqtt {
    #[serde(default = "Config::default_mqtt_namespace")]
    pub namespace: String,

    #[serde(default = "Config::default_mqtt_homeassistant")]
    pub homeassistant: HomeAssistant,
}

impl Mqtt {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn homeassistant(&self) -> &HomeAssistant {
        &self.homeassistant
    }
} // }}}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: Self::default_loglevel(),
            mqtt: Self::default_mqtt(),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    pub fn new(file: &str) -> Result<Self> {
        info!("Reading configuration from {}", file);
        let content = std::fs::read_to_string(file)
            .map_err(|err| anyhow!("error reading {}: {}", file, err))?;

        let config = Self::from_str(&content)?;

        info!("Configuration loaded successfully:");
        info!("  Log Level: {}", config.loglevel);
        info!("  MQTT Namespace: {}", config.mqtt.namespace);
        info!(
            "  Home Assistant: {}",
            if config.mqtt.homeassistant.enabled { "enabled" } else { "disabled" }
        );
        if config.mqtt.homeassistant.enabled {
            info!("    Prefix: {}", config.mqtt.homeassistant.prefix);
        }

        Ok(config)
    }

    pub fn loglevel(&self) -> &str {
        &self.loglevel
    }

    pub fn mqtt(&self) -> &Mqtt {
        &self.mqtt
    }

    fn validate(&self) -> Result<()> {
        if log::LevelFilter::from_str(&self.loglevel).is_err() {
            bail!("invalid loglevel: {}", self.loglevel);
        }

        let namespace = &self.mqtt.namespace;
        if namespace.is_empty() {
            bail!("mqtt.namespace cannot be empty");
        }
        if namespace.contains(&['#', '+'][..]) {
            bail!("mqtt.namespace cannot contain wildcards: {}", namespace);
        }

        if self.mqtt.homeassistant.enabled && self.mqtt.homeassistant.prefix.is_empty() {
            bail!("mqtt.homeassistant.prefix cannot be empty");
        }

        Ok(())
    }

    fn default_loglevel() -> String {
        "info".to_string()
    }

    fn default_mqtt() -> Mqtt {
        Mqtt {
            namespace: Self::default_mqtt_namespace(),
            homeassistant: Self::default_mqtt_homeassistant(),
        }
    }

    fn default_mqtt_namespace() -> String {
        DOMAIN.to_string()
    }

    fn default_mqtt_homeassistant() -> HomeAssistant {
        HomeAssistant {
            enabled: Self::default_enabled(),
            prefix: Self::default_mqtt_homeassistant_prefix(),
        }
    }

    fn default_mqtt_homeassistant_prefix() -> String {
        "homeassistant".to_string()
    }

    fn default_enabled() -> bool {
        true
    }
}
