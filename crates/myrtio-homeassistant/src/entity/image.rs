//! Image entity for Home Assistant MQTT integration
//!
//! An image entity publishes raw image bytes (PNG, JPEG, SVG, ...) on its
//! image topic and optional JSON attributes next to it.

use heapless::String;

use crate::device::Device;
use crate::ha::topic;

/// Content type used when the builder is not told otherwise
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Image entity configuration for Home Assistant discovery
#[derive(Debug, Clone)]
pub struct ImageEntity<'a> {
    /// Entity identifier suffix (combined with device id for `unique_id`)
    pub id: &'a str,
    /// Human-readable name
    pub name: &'a str,
    /// Reference to parent device
    pub device: &'a Device<'a>,
    /// Translation key for the entity name
    pub translation_key: Option<&'a str>,
    /// MIME type of the published image
    pub content_type: &'a str,
    /// MDI icon (e.g., "mdi:map")
    pub icon: Option<&'a str>,
    /// Whether the entity is enabled when first added to the registry
    pub enabled_by_default: bool,
    /// Attribute keys the recorder must not store
    pub unrecorded_attributes: &'a [&'a str],
}

impl ImageEntity<'_> {
    /// Get the unique ID for this entity
    pub fn unique_id<const N: usize>(&self) -> String<N> {
        topic::unique_id(self.device.id, self.id)
    }

    /// Get the topic the image bytes are published on
    pub fn image_topic<const N: usize>(&self) -> String<N> {
        topic::state_topic(self.device.id, self.id)
    }

    /// Get the topic the JSON attributes are published on
    pub fn attributes_topic<const N: usize>(&self) -> String<N> {
        topic::attributes_topic(self.device.id, self.id)
    }

    /// Get the config topic for Home Assistant discovery
    pub fn config_topic<const N: usize>(&self) -> String<N> {
        topic::config_topic("image", self.device.id, self.id)
    }

    /// Check whether an attribute key is excluded from recording
    pub fn is_unrecorded(&self, key: &str) -> bool {
        self.unrecorded_attributes.contains(&key)
    }
}

/// Builder for [`ImageEntity`]
pub struct ImageEntityBuilder<'a> {
    id: &'a str,
    device: &'a Device<'a>,
    name: Option<&'a str>,
    translation_key: Option<&'a str>,
    content_type: &'a str,
    icon: Option<&'a str>,
    enabled_by_default: bool,
    unrecorded_attributes: &'a [&'a str],
}

impl<'a> ImageEntityBuilder<'a> {
    pub const fn new(id: &'a str, device: &'a Device<'a>) -> Self {
        Self {
            id,
            device,
            name: None,
            translation_key: None,
            content_type: DEFAULT_CONTENT_TYPE,
            icon: None,
            enabled_by_default: true,
            unrecorded_attributes: &[],
        }
    }

    /// Set the entity name
    #[must_use]
    pub const fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the translation key
    #[must_use]
    pub const fn translation_key(mut self, key: &'a str) -> Self {
        self.translation_key = Some(key);
        self
    }

    /// Set the MIME type of the image payload
    #[must_use]
    pub const fn content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Set the MDI icon
    #[must_use]
    pub const fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set whether the entity starts enabled
    #[must_use]
    pub const fn enabled_by_default(mut self, enabled: bool) -> Self {
        self.enabled_by_default = enabled;
        self
    }

    /// Set attribute keys excluded from recording
    #[must_use]
    pub const fn unrecorded_attributes(mut self, keys: &'a [&'a str]) -> Self {
        self.unrecorded_attributes = keys;
        self
    }

    /// Build the [`ImageEntity`]
    ///
    /// Falls back to the entity id when no name was given.
    pub const fn build(self) -> ImageEntity<'a> {
        ImageEntity {
            id: self.id,
            name: match self.name {
                Some(n) => n,
                None => self.id,
            },
            device: self.device,
            translation_key: self.translation_key,
            content_type: self.content_type,
            icon: self.icon,
            enabled_by_default: self.enabled_by_default,
            unrecorded_attributes: self.unrecorded_attributes,
        }
    }
}
