//! Home Assistant wire-format types
//!
//! This module contains structures that match the JSON schema
//! expected by Home Assistant MQTT integration for discovery.

pub mod discovery;
pub mod mapping;
pub mod topic;

pub use discovery::{HaDeviceInfo, HaImageDiscovery};
pub use mapping::{
    ImageDiscoveryContext, device_to_ha, image_to_discovery, write_image_discovery,
};
pub use topic::{attributes_topic, config_topic, state_topic, unique_id};
