//! Map events pushed by the device
//!
//! The device client forwards events for subscribed streams into a
//! [`MapEventChannel`]; the entity drains the channel and dispatches each
//! event to the handler registered for its stream.

use core::cell::RefCell;

use alloc::string::String;
use chrono::{DateTime, Utc};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use heapless::Vec;

use crate::config::EVENT_CHANNEL_SIZE;

/// Event stream identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Cached map metadata
    MapInfo,
    /// Map image was re-rendered
    MapChanged,
}

/// Descriptive metadata of the current map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInfoEvent {
    pub name: String,
}

impl MapInfoEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Notification that the map image has been updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapChangedEvent {
    pub when: DateTime<Utc>,
}

impl MapChangedEvent {
    pub const fn new(when: DateTime<Utc>) -> Self {
        Self { when }
    }
}

/// Event delivered through the map event channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    Info(MapInfoEvent),
    Changed(MapChangedEvent),
}

impl MapEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            MapEvent::Info(_) => EventKind::MapInfo,
            MapEvent::Changed(_) => EventKind::MapChanged,
        }
    }
}

/// Handle returned by [`EventSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u16);

impl SubscriptionId {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Device-side registry of event stream subscriptions
pub trait EventSource {
    /// Subscribe to a stream, `None` when no more subscribers fit
    fn subscribe(&self, kind: EventKind) -> Option<SubscriptionId>;

    /// Drop a subscription; unknown ids are ignored
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Type alias for the map event channel
pub type MapEventChannel = Channel<CriticalSectionRawMutex, MapEvent, EVENT_CHANNEL_SIZE>;

/// Type alias for map event sender
pub type MapEventSender<'a> =
    Sender<'a, CriticalSectionRawMutex, MapEvent, EVENT_CHANNEL_SIZE>;

/// Type alias for map event receiver
pub type MapEventReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, MapEvent, EVENT_CHANNEL_SIZE>;

struct Registry<const N: usize> {
    next_id: u16,
    entries: Vec<(SubscriptionId, EventKind), N>,
}

impl<const N: usize> Registry<N> {
    /// Next counter value not held by a live subscription
    ///
    /// The counter wraps; `N` is far below `u16::MAX`, so a free id is
    /// always found.
    fn allocate_id(&mut self) -> SubscriptionId {
        loop {
            let id = SubscriptionId(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.entries.iter().any(|(live, _)| *live == id) {
                return id;
            }
        }
    }
}

/// Fixed-capacity [`EventSource`] for device clients
///
/// Tracks which streams have live subscribers so the client only forwards
/// events somebody listens to.
pub struct SubscriptionRegistry<const N: usize> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Registry<N>>>,
}

impl<const N: usize> SubscriptionRegistry<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Check whether a stream has at least one subscriber
    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.inner
            .lock(|cell| cell.borrow().entries.iter().any(|(_, k)| *k == kind))
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.inner.lock(|cell| cell.borrow().entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward an event if its stream is subscribed
    ///
    /// Returns `false` when nobody listens or the channel is full.
    pub fn forward(&self, event: MapEvent, sender: &MapEventSender<'_>) -> bool {
        if !self.is_subscribed(event.kind()) {
            return false;
        }
        match sender.try_send(event) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("map_events: channel full, dropping event");
                false
            }
        }
    }
}

impl<const N: usize> Default for SubscriptionRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventSource for SubscriptionRegistry<N> {
    fn subscribe(&self, kind: EventKind) -> Option<SubscriptionId> {
        self.inner.lock(|cell| {
            let mut registry = cell.borrow_mut();
            if registry.entries.is_full() {
                return None;
            }
            let id = registry.allocate_id();
            registry.entries.push((id, kind)).ok()?;
            Some(id)
        })
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.lock(|cell| {
            cell.borrow_mut().entries.retain(|(entry, _)| *entry != id);
        });
    }
}
