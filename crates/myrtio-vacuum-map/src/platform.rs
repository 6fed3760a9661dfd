//! Image platform setup
//!
//! Called once per robot when the image platform is set up; devices without
//! a map capability get no entity.

use crate::device::VacuumDevice;
use crate::image::{MapImage, StateWriter};

/// Build the map image entity for `device`, if it can map
pub fn map_image_entities<'a, D: VacuumDevice, W: StateWriter>(
    device: &'a D,
    writer: &'a W,
) -> Option<MapImage<'a, D, W>> {
    let Some(capability) = device.capabilities().map else {
        log::debug!("map_image: {} reports no map capability", device.info().id);
        return None;
    };
    Some(MapImage::new(device, capability, writer))
}
