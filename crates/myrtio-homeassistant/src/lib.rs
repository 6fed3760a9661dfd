//! Home Assistant MQTT integration types for embedded devices
//!
//! This crate provides the types a device firmware needs to describe its
//! entities to Home Assistant via MQTT discovery. It is structured in two
//! layers:
//!
//! - **Domain layer** (`device`, `entity`): Platform-independent DTOs for devices and entities
//! - **HA wire layer** (`ha`): JSON-serializable types matching Home Assistant's MQTT schema
//!
//! # Example
//!
//! ```
//! use myrtio_homeassistant::{Device, ImageEntityBuilder};
//!
//! const DEVICE: Device = Device::new("vacuum_1", "Vacuum");
//! const MAP: myrtio_homeassistant::ImageEntity =
//!     ImageEntityBuilder::new("map", &DEVICE)
//!         .content_type("image/svg+xml")
//!         .enabled_by_default(false)
//!         .build();
//!
//! let mut buf = [0u8; 512];
//! let (topic, len) =
//!     myrtio_homeassistant::ha::write_image_discovery::<64>(&MAP, &mut buf).unwrap();
//! assert_eq!(topic.as_str(), "homeassistant/image/vacuum_1_map/config");
//! assert!(len > 0);
//! ```

#![no_std]

pub mod device;
pub mod entity;
pub mod error;
pub mod ha;

// Re-export domain types
pub use device::{Device, DeviceBuilder};
pub use entity::{ImageEntity, ImageEntityBuilder};
pub use error::HaError;

// Re-export HA types for advanced usage
pub use ha::{HaDeviceInfo, HaImageDiscovery};
