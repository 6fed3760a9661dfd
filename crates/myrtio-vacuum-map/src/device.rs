//! Robot device seen from the entity layer

use myrtio_homeassistant::Device;

use crate::event::{EventKind, EventSource};
use crate::map::MapControl;

/// Event streams exposed by a device's map capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCapability {
    /// Stream carrying cached map metadata
    pub cached_info: EventKind,
    /// Stream announcing re-rendered map images
    pub changed: EventKind,
}

impl MapCapability {
    pub const fn new() -> Self {
        Self {
            cached_info: EventKind::MapInfo,
            changed: EventKind::MapChanged,
        }
    }
}

impl Default for MapCapability {
    fn default() -> Self {
        Self::new()
    }
}

/// Features reported by the device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Present when the robot can build maps
    pub map: Option<MapCapability>,
}

impl Capabilities {
    pub const fn new() -> Self {
        Self { map: None }
    }

    #[must_use]
    pub const fn with_map(mut self, map: MapCapability) -> Self {
        self.map = Some(map);
        self
    }
}

/// Robot client handle
pub trait VacuumDevice {
    type Map: MapControl;
    type Events: EventSource;

    /// Registry description of the device
    fn info(&self) -> &Device<'_>;

    fn capabilities(&self) -> &Capabilities;

    fn map(&self) -> &Self::Map;

    fn events(&self) -> &Self::Events;
}
