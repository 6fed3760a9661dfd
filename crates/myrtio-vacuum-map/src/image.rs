//! Map image entity
//!
//! [`MapImage`] binds a robot's map to a Home Assistant image entity. It
//! never owns or mutates the map: image bytes and attributes are read from
//! the device on every call, and the entity only drives `enable`, `disable`
//! and `refresh`.
//!
//! # Lifecycle
//!
//! ```ignore
//! let image = platform::map_image_entities(&DEVICE, &WRITER).unwrap();
//! let activation = image.activate()?;      // subscribes, enables the map
//! loop {
//!     image.handle_next(&receiver).await;  // map-info / map-changed
//! }
//! drop(activation);                        // unsubscribes, disables the map
//! ```

use core::cell::RefCell;

use alloc::string::String;
use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use myrtio_homeassistant::{HaError, ImageEntity, ImageEntityBuilder, ha};
use serde::Serialize;

use crate::config::{
    MAP_ENTITY_KEY, MAP_TRANSLATION_KEY, MAX_SUBSCRIPTIONS, MAX_TOPIC_LEN, SVG_CONTENT_TYPE,
    UNRECORDED_ATTRIBUTES,
};
use crate::device::{MapCapability, VacuumDevice};
use crate::error::MapImageError;
use crate::event::{EventKind, EventSource, MapEvent, MapEventReceiver, SubscriptionId};
use crate::map::{CalibrationPoint, MapControl};

/// Error of the device map behind `D`
pub type DeviceError<D> = <<D as VacuumDevice>::Map as MapControl>::Error;

/// Host hook for publishing entity state
pub trait StateWriter {
    /// Schedule a state write for `entity`
    fn write_state(&self, entity: &ImageEntity<'_>);
}

/// Extra state attributes of the map image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calibration_points: Option<Vec<CalibrationPoint>>,
}

impl MapAttributes {
    pub fn is_empty(&self) -> bool {
        self.map_name.is_none() && self.calibration_points.is_none()
    }
}

/// What the host has to do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reaction {
    None,
    WriteState,
}

#[derive(Debug, Default)]
struct DisplayState {
    map_name: Option<String>,
    image_last_updated: Option<DateTime<Utc>>,
}

type Handler = fn(&mut DisplayState, &MapEvent) -> Reaction;

/// Live subscription tagged with the stream it listens to
#[derive(Clone, Copy)]
struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
struct ImageState {
    display: DisplayState,
    subscriptions: heapless::Vec<Subscription, MAX_SUBSCRIPTIONS>,
    active: bool,
}

fn on_info(display: &mut DisplayState, event: &MapEvent) -> Reaction {
    if let MapEvent::Info(info) = event {
        display.map_name = Some(info.name.clone());
    }
    Reaction::None
}

fn on_changed(display: &mut DisplayState, event: &MapEvent) -> Reaction {
    match event {
        MapEvent::Changed(changed) => {
            display.image_last_updated = Some(changed.when);
            Reaction::WriteState
        }
        MapEvent::Info(_) => Reaction::None,
    }
}

/// Map image entity of a single robot
pub struct MapImage<'a, D: VacuumDevice, W: StateWriter> {
    device: &'a D,
    writer: &'a W,
    capability: MapCapability,
    entity: ImageEntity<'a>,
    state: Mutex<CriticalSectionRawMutex, RefCell<ImageState>>,
}

impl<'a, D: VacuumDevice, W: StateWriter> MapImage<'a, D, W> {
    /// Create the entity for a device reporting `capability`
    ///
    /// The entity is registered disabled by default and always serves SVG.
    pub fn new(device: &'a D, capability: MapCapability, writer: &'a W) -> Self {
        let entity = ImageEntityBuilder::new(MAP_ENTITY_KEY, device.info())
            .translation_key(MAP_TRANSLATION_KEY)
            .content_type(SVG_CONTENT_TYPE)
            .enabled_by_default(false)
            .unrecorded_attributes(UNRECORDED_ATTRIBUTES)
            .build();

        Self {
            device,
            writer,
            capability,
            entity,
            state: Mutex::new(RefCell::new(ImageState::default())),
        }
    }

    /// Entity description for registration and discovery
    pub fn entity(&self) -> &ImageEntity<'a> {
        &self.entity
    }

    /// Write the discovery payload into `buf`
    ///
    /// Returns the config topic and the payload length.
    pub fn discovery_payload(
        &self,
        buf: &mut [u8],
    ) -> Result<(heapless::String<MAX_TOPIC_LEN>, usize), HaError> {
        ha::write_image_discovery(&self.entity, buf)
    }

    pub fn content_type(&self) -> &str {
        self.entity.content_type
    }

    /// Bytes of the current map, `None` until the map is calibrated
    pub fn image(&self) -> Option<Vec<u8>> {
        self.device
            .map()
            .calibrated_map()
            .map(|map| map.image.encode())
    }

    /// Attributes recomputed from the current map
    ///
    /// Empty until the map is calibrated.
    pub fn extra_state_attributes(&self) -> MapAttributes {
        match self.device.map().calibrated_map() {
            Some(map) => MapAttributes {
                map_name: self.map_name(),
                calibration_points: Some(map.calibration_points),
            },
            None => MapAttributes::default(),
        }
    }

    /// Render [`Self::extra_state_attributes`] as a JSON object
    pub fn attributes_json<const N: usize>(
        &self,
    ) -> Result<heapless::String<N>, MapImageError<DeviceError<D>>> {
        serde_json_core::to_string(&self.extra_state_attributes())
            .map_err(|_| MapImageError::Serialization)
    }

    /// Name from the last map-info event
    pub fn map_name(&self) -> Option<String> {
        self.state
            .lock(|cell| cell.borrow().display.map_name.clone())
    }

    /// Timestamp from the last map-changed event
    pub fn image_last_updated(&self) -> Option<DateTime<Utc>> {
        self.state
            .lock(|cell| cell.borrow().display.image_last_updated)
    }

    pub fn is_active(&self) -> bool {
        self.state.lock(|cell| cell.borrow().active)
    }

    /// Subscribe to the map streams and enable the device map
    ///
    /// The returned guard undoes both when released or dropped. If the map
    /// fails to enable, the subscriptions are rolled back and the error is
    /// returned; `disable` is not called in that case.
    pub fn activate(
        &self,
    ) -> Result<Activation<'_, 'a, D, W>, MapImageError<DeviceError<D>>> {
        if self.is_active() {
            return Err(MapImageError::AlreadyActive);
        }

        let streams: [(EventKind, Handler); MAX_SUBSCRIPTIONS] = [
            (self.capability.cached_info, on_info),
            (self.capability.changed, on_changed),
        ];
        for (kind, handler) in streams {
            if let Err(e) = self.subscribe(kind, handler) {
                log::warn!("map_image: failed to subscribe to {:?}", kind);
                self.unsubscribe_all();
                return Err(e);
            }
        }

        self.state.lock(|cell| cell.borrow_mut().active = true);

        if let Err(e) = self.device.map().enable() {
            log::warn!(
                "map_image: failed to enable map of {}: {:?}",
                self.entity.device.id,
                e
            );
            self.unsubscribe_all();
            self.state.lock(|cell| cell.borrow_mut().active = false);
            return Err(MapImageError::Device(e));
        }

        log::info!("map_image: activated for {}", self.entity.device.id);
        Ok(Activation { image: self })
    }

    fn subscribe(
        &self,
        kind: EventKind,
        handler: Handler,
    ) -> Result<(), MapImageError<DeviceError<D>>> {
        let id = self
            .device
            .events()
            .subscribe(kind)
            .ok_or(MapImageError::MaxSubscriptionsReached)?;

        let pushed = self.state.lock(|cell| {
            cell.borrow_mut()
                .subscriptions
                .push(Subscription { id, kind, handler })
                .is_ok()
        });
        if !pushed {
            self.device.events().unsubscribe(id);
            return Err(MapImageError::MaxSubscriptionsReached);
        }
        Ok(())
    }

    fn unsubscribe_all(&self) {
        let subscriptions = self
            .state
            .lock(|cell| core::mem::take(&mut cell.borrow_mut().subscriptions));
        for subscription in &subscriptions {
            self.device.events().unsubscribe(subscription.id);
        }
    }

    fn deactivate(&self) {
        self.unsubscribe_all();
        self.state.lock(|cell| cell.borrow_mut().active = false);
        self.device.map().disable();
        log::info!("map_image: deactivated for {}", self.entity.device.id);
    }

    /// Apply an event through the handler registered for its stream
    ///
    /// Returns `false` when no live subscription matches, e.g. after the
    /// entity was deactivated.
    pub fn on_event(&self, event: &MapEvent) -> bool {
        let kind = event.kind();
        let reaction = self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            let handler = state
                .subscriptions
                .iter()
                .find(|s| s.kind == kind)
                .map(|s| s.handler)?;
            Some(handler(&mut state.display, event))
        });

        match reaction {
            None => {
                log::warn!("map_image: ignoring {:?} without subscription", kind);
                false
            }
            Some(Reaction::None) => {
                log::debug!("map_image: applied {:?}", kind);
                true
            }
            Some(Reaction::WriteState) => {
                log::debug!("map_image: applied {:?}, writing state", kind);
                self.writer.write_state(&self.entity);
                true
            }
        }
    }

    /// Wait for the next event and apply it
    pub async fn handle_next(&self, receiver: &MapEventReceiver<'_>) -> bool {
        let event = receiver.receive().await;
        self.on_event(&event)
    }

    /// Apply every event already queued, returns how many were handled
    pub fn pump(&self, receiver: &MapEventReceiver<'_>) -> usize {
        let mut handled = 0;
        while let Ok(event) = receiver.try_receive() {
            if self.on_event(&event) {
                handled += 1;
            }
        }
        handled
    }

    /// Ask the device to re-render the map
    ///
    /// Backs the host's generic entity update service. The new image reaches
    /// the host through the following map-changed event.
    pub async fn update(&self) -> Result<(), MapImageError<DeviceError<D>>> {
        log::debug!("map_image: refresh requested for {}", self.entity.device.id);
        self.device
            .map()
            .refresh()
            .await
            .map_err(MapImageError::Device)
    }
}

/// Guard returned by [`MapImage::activate`]
///
/// Unsubscribes every handler and disables the map exactly once.
#[must_use = "dropping the activation immediately disables the map"]
pub struct Activation<'i, 'a, D: VacuumDevice, W: StateWriter> {
    image: &'i MapImage<'a, D, W>,
}

impl<D: VacuumDevice, W: StateWriter> Activation<'_, '_, D, W> {
    /// Tear the entity down now
    pub fn release(self) {
        drop(self);
    }
}

impl<D: VacuumDevice, W: StateWriter> Drop for Activation<'_, '_, D, W> {
    fn drop(&mut self) {
        self.image.deactivate();
    }
}
