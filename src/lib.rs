// Module declarations for the crate's components
pub mod command;        // Switch commands received over MQTT
pub mod config;         // Configuration management
pub mod device;         // Device registry metadata
pub mod entry;          // Per config entry shared state
pub mod error;          // Inverter client error kinds
pub mod home_assistant; // Home Assistant MQTT discovery
pub mod host;           // Capabilities provided by the home-automation host
pub mod inverter;       // Inverter client interface
pub mod logging;        // env_logger setup
pub mod mqtt;           // MQTT messages and topics
pub mod platform;       // Entry setup and teardown
pub mod prelude;        // Common imports and types
pub mod settings;       // Switchable setting descriptors
pub mod switch;         // Switch entity

/// Prefix of every unique id and device identifier we create.
pub const DOMAIN: &str = "goodwe";
