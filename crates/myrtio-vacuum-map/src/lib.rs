//! Vacuum map image entity
//!
//! Exposes a robot vacuum's calibrated map as a Home Assistant image entity.
//! Map calibration and rendering stay in the device client; this crate wires
//! its events and controls to the entity:
//!
//! - `map` - Calibrated map snapshot and the [`MapControl`] trait
//! - `event` - Map-info / map-changed events, subscriptions and the event channel
//! - `device` - [`VacuumDevice`] trait and capability flags
//! - `image` - [`MapImage`] entity and its [`Activation`] guard
//! - `platform` - Entity generator run at platform setup
//!
//! # Example
//!
//! ```ignore
//! use myrtio_vacuum_map::{MapEventChannel, platform};
//!
//! static EVENTS: MapEventChannel = MapEventChannel::new();
//!
//! let image = platform::map_image_entities(&device, &writer).unwrap();
//! let _activation = image.activate()?;
//! loop {
//!     image.handle_next(&EVENTS.receiver()).await;
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod image;
pub mod map;
pub mod platform;

pub use device::{Capabilities, MapCapability, VacuumDevice};
pub use error::MapImageError;
pub use event::{
    EventKind, EventSource, MapChangedEvent, MapEvent, MapEventChannel, MapEventReceiver,
    MapEventSender, MapInfoEvent, SubscriptionId, SubscriptionRegistry,
};
pub use image::{Activation, DeviceError, MapAttributes, MapImage, StateWriter};
pub use map::{CalibratedMap, CalibrationPoint, MapControl, Point, SvgImage};
