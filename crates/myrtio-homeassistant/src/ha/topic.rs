//! Topic layout of MQTT-discovered entities
//!
//! Every entity lives under `{device_id}/{entity_id}`; its discovery config
//! is announced under the `homeassistant` prefix.

use core::fmt::{Arguments, Write};
use heapless::String;

/// Discovery prefix Home Assistant listens on
pub const DISCOVERY_PREFIX: &str = "homeassistant";

/// Format into a fixed-capacity string, truncation leaves a partial topic
fn format<const N: usize>(args: Arguments<'_>) -> String<N> {
    let mut out = String::new();
    let _ = out.write_fmt(args);
    out
}

/// `homeassistant/{component}/{device_id}_{entity_id}/config`
pub fn config_topic<const N: usize>(
    component: &str,
    device_id: &str,
    entity_id: &str,
) -> String<N> {
    format(format_args!(
        "{DISCOVERY_PREFIX}/{component}/{device_id}_{entity_id}/config"
    ))
}

/// `{device_id}/{entity_id}`, carries the entity payload
pub fn state_topic<const N: usize>(device_id: &str, entity_id: &str) -> String<N> {
    format(format_args!("{device_id}/{entity_id}"))
}

/// `{device_id}/{entity_id}/attributes`, carries the JSON attributes
pub fn attributes_topic<const N: usize>(device_id: &str, entity_id: &str) -> String<N> {
    format(format_args!("{device_id}/{entity_id}/attributes"))
}

/// `{device_id}_{entity_id}`
pub fn unique_id<const N: usize>(device_id: &str, entity_id: &str) -> String<N> {
    format(format_args!("{device_id}_{entity_id}"))
}
