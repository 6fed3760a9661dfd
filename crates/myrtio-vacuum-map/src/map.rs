//! Device map collaborator
//!
//! The robot client owns map calibration and rendering. This module only
//! describes the snapshot it hands out and the controls the entity drives.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

/// Point in either robot or image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pair of matching positions in robot space and image space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalibrationPoint {
    pub vacuum: Point,
    pub map: Point,
}

impl CalibrationPoint {
    pub const fn new(vacuum: Point, map: Point) -> Self {
        Self { vacuum, map }
    }
}

/// Rendered map document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgImage(String);

impl SvgImage {
    pub fn new(svg: impl Into<String>) -> Self {
        Self(svg.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes of the document
    pub fn encode(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

impl From<String> for SvgImage {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SvgImage {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// Map image together with the points calibrating it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibratedMap {
    pub image: SvgImage,
    pub calibration_points: Vec<CalibrationPoint>,
}

/// Controls exposed by the device's map object
///
/// The map is shared with every other consumer of the device, so `enable`
/// and `disable` must be reference-counted or idempotent on the device side.
#[allow(async_fn_in_trait)]
pub trait MapControl {
    type Error: core::fmt::Debug;

    /// Start collecting map telemetry
    fn enable(&self) -> Result<(), Self::Error>;

    /// Stop collecting map telemetry
    fn disable(&self);

    /// Request a fresh render; completion is reported by a map-changed event
    async fn refresh(&self) -> Result<(), Self::Error>;

    /// Current calibrated map, `None` until the first calibration
    fn calibrated_map(&self) -> Option<CalibratedMap>;
}
