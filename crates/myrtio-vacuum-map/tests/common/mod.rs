//! Fake robot shared by the integration tests.

#![allow(dead_code, unreachable_pub)]

use core::cell::{Cell, RefCell};

use chrono::{DateTime, TimeZone, Utc};
use myrtio_homeassistant::{Device, ImageEntity};
use myrtio_vacuum_map::{
    CalibratedMap, CalibrationPoint, Capabilities, MapCapability, MapControl, Point,
    StateWriter, SubscriptionRegistry, SvgImage, VacuumDevice,
};

pub const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0h10v10z"/></svg>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

#[derive(Default)]
pub struct FakeMap {
    pub enabled: Cell<u32>,
    pub disabled: Cell<u32>,
    pub refreshed: Cell<u32>,
    pub fail_enable: Cell<bool>,
    pub fail_refresh: Cell<bool>,
    pub calibrated: RefCell<Option<CalibratedMap>>,
}

impl FakeMap {
    pub fn calibrate(&self, map: CalibratedMap) {
        *self.calibrated.borrow_mut() = Some(map);
    }
}

impl MapControl for FakeMap {
    type Error = FakeError;

    fn enable(&self) -> Result<(), FakeError> {
        self.enabled.set(self.enabled.get() + 1);
        if self.fail_enable.get() {
            return Err(FakeError);
        }
        Ok(())
    }

    fn disable(&self) {
        self.disabled.set(self.disabled.get() + 1);
    }

    async fn refresh(&self) -> Result<(), FakeError> {
        self.refreshed.set(self.refreshed.get() + 1);
        if self.fail_refresh.get() {
            return Err(FakeError);
        }
        Ok(())
    }

    fn calibrated_map(&self) -> Option<CalibratedMap> {
        self.calibrated.borrow().clone()
    }
}

pub struct FakeVacuum<const N: usize = 4> {
    pub info: Device<'static>,
    pub capabilities: Capabilities,
    pub map: FakeMap,
    pub events: SubscriptionRegistry<N>,
}

impl<const N: usize> FakeVacuum<N> {
    pub fn new() -> Self {
        Self {
            info: Device::builder()
                .id("deebot_1")
                .name("Deebot")
                .manufacturer(Some("Ecovacs"))
                .build(),
            capabilities: Capabilities::new().with_map(MapCapability::new()),
            map: FakeMap::default(),
            events: SubscriptionRegistry::new(),
        }
    }

    pub fn without_map() -> Self {
        Self {
            capabilities: Capabilities::new(),
            ..Self::new()
        }
    }
}

impl<const N: usize> VacuumDevice for FakeVacuum<N> {
    type Map = FakeMap;
    type Events = SubscriptionRegistry<N>;

    fn info(&self) -> &Device<'_> {
        &self.info
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn map(&self) -> &FakeMap {
        &self.map
    }

    fn events(&self) -> &SubscriptionRegistry<N> {
        &self.events
    }
}

#[derive(Default)]
pub struct RecordingWriter {
    pub writes: Cell<u32>,
}

impl StateWriter for RecordingWriter {
    fn write_state(&self, entity: &ImageEntity<'_>) {
        assert_eq!(entity.id, "map");
        self.writes.set(self.writes.get() + 1);
    }
}

pub fn living_room_map() -> CalibratedMap {
    CalibratedMap {
        image: SvgImage::from(SVG),
        calibration_points: vec![
            CalibrationPoint::new(Point::new(0, 0), Point::new(100, 200)),
            CalibrationPoint::new(Point::new(5000, 0), Point::new(200, 200)),
        ],
    }
}

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}
