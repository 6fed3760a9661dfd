//! Mapping between domain types and Home Assistant wire types

use heapless::String;

use crate::device::Device;
use crate::error::HaError;
use crate::entity::image::ImageEntity;
use crate::ha::discovery::{HaDeviceInfo, HaImageDiscovery};
use crate::ha::topic;

/// Convert a domain Device to [`HaDeviceInfo`]
pub fn device_to_ha<'a>(device: &'a Device<'a>, identifiers: &'a [&'a str]) -> HaDeviceInfo<'a> {
    HaDeviceInfo {
        name: device.name,
        identifiers,
        manufacturer: device.manufacturer,
        model: device.model,
        sw_version: device.sw_version,
    }
}

/// Context for building image discovery payload
pub struct ImageDiscoveryContext<const N: usize> {
    pub unique_id: String<N>,
    pub image_topic: String<N>,
    pub attributes_topic: String<N>,
    pub config_topic: String<N>,
    pub identifier: String<N>,
}

impl<const N: usize> ImageDiscoveryContext<N> {
    /// Build context for an image entity
    pub fn new(entity: &ImageEntity<'_>) -> Self {
        let mut identifier: String<N> = String::new();
        let _ = identifier.push_str(entity.device.id);

        Self {
            unique_id: entity.unique_id(),
            image_topic: entity.image_topic(),
            attributes_topic: entity.attributes_topic(),
            config_topic: entity.config_topic(),
            identifier,
        }
    }
}

/// Build [`HaImageDiscovery`] from an [`ImageEntity`] and pre-built context
pub fn image_to_discovery<'a, 'b, const N: usize>(
    entity: &'a ImageEntity<'a>,
    ctx: &'b ImageDiscoveryContext<N>,
    identifier_slice: &'b [&'b str],
) -> HaImageDiscovery<'b>
where
    'a: 'b,
{
    HaImageDiscovery {
        name: entity.name,
        unique_id: ctx.unique_id.as_str(),
        image_topic: ctx.image_topic.as_str(),
        content_type: entity.content_type,
        json_attributes_topic: ctx.attributes_topic.as_str(),
        device: device_to_ha(entity.device, identifier_slice),
        translation_key: entity.translation_key,
        icon: entity.icon,
        enabled_by_default: entity.enabled_by_default,
    }
}

/// Serialize the discovery payload of an image entity into `buf`
///
/// Returns the config topic together with the number of bytes written.
pub fn write_image_discovery<const N: usize>(
    entity: &ImageEntity<'_>,
    buf: &mut [u8],
) -> Result<(String<N>, usize), HaError> {
    let ctx: ImageDiscoveryContext<N> = ImageDiscoveryContext::new(entity);
    let identifiers = [ctx.identifier.as_str()];
    let config = image_to_discovery(entity, &ctx, &identifiers);
    let len = serde_json_core::to_slice(&config, buf).map_err(|e| match e {
        serde_json_core::ser::Error::BufferFull => HaError::BufferTooSmall,
        _ => HaError::Serialization,
    })?;
    Ok((ctx.config_topic, len))
}
