//! Home Assistant discovery payload structures
//!
//! These types match the JSON schema expected by Home Assistant
//! for MQTT discovery messages.

use serde::Serialize;

/// Device information for Home Assistant discovery payload
#[derive(Clone, Serialize)]
pub struct HaDeviceInfo<'a> {
    /// Human-readable device name
    pub name: &'a str,
    /// Device identifiers array
    pub identifiers: &'a [&'a str],
    /// Manufacturer name (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<&'a str>,
    /// Model name (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    /// Software version (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<&'a str>,
}

/// Image entity discovery payload for Home Assistant
#[derive(Serialize)]
pub struct HaImageDiscovery<'a> {
    /// Human-readable name
    pub name: &'a str,
    /// Unique identifier
    pub unique_id: &'a str,
    /// Topic carrying the raw image payload
    pub image_topic: &'a str,
    /// MIME type of the image payload
    pub content_type: &'a str,
    /// Topic carrying extra attributes as a JSON object
    pub json_attributes_topic: &'a str,
    /// Device information
    pub device: HaDeviceInfo<'a>,
    /// Translation key (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_key: Option<&'a str>,
    /// MDI icon (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'a str>,
    /// Registry default; omitted when the entity starts enabled
    #[serde(skip_serializing_if = "is_true")]
    pub enabled_by_default: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_true(v: &bool) -> bool {
    *v
}
