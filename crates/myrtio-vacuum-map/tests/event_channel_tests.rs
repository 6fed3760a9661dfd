//! Integration tests for event subscriptions and channel delivery.

mod common;

use common::{FakeVacuum, RecordingWriter, at};
use myrtio_vacuum_map::{
    EventKind, EventSource, MapChangedEvent, MapEvent, MapEventChannel, MapInfoEvent,
    SubscriptionRegistry, platform,
};

// -----------------------------------------------------------------------------
// Subscription registry
// -----------------------------------------------------------------------------

#[test]
fn registry_tracks_subscriptions_per_stream() {
    let registry: SubscriptionRegistry<4> = SubscriptionRegistry::new();

    let info = registry.subscribe(EventKind::MapInfo).unwrap();
    let changed = registry.subscribe(EventKind::MapChanged).unwrap();

    assert_ne!(info, changed);
    assert!(registry.is_subscribed(EventKind::MapInfo));
    assert!(registry.is_subscribed(EventKind::MapChanged));

    registry.unsubscribe(info);
    assert!(!registry.is_subscribed(EventKind::MapInfo));
    assert!(registry.is_subscribed(EventKind::MapChanged));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_refuses_subscribers_beyond_capacity() {
    let registry: SubscriptionRegistry<1> = SubscriptionRegistry::new();

    assert!(registry.subscribe(EventKind::MapInfo).is_some());
    assert!(registry.subscribe(EventKind::MapChanged).is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn unknown_unsubscribe_is_ignored() {
    let registry: SubscriptionRegistry<2> = SubscriptionRegistry::new();
    let id = registry.subscribe(EventKind::MapInfo).unwrap();

    registry.unsubscribe(id);
    registry.unsubscribe(id);

    assert!(registry.is_empty());
}

#[test]
fn wrapped_ids_skip_live_subscriptions() {
    let registry: SubscriptionRegistry<2> = SubscriptionRegistry::new();
    let held = registry.subscribe(EventKind::MapInfo).unwrap();

    for _ in 0..u16::MAX {
        let id = registry.subscribe(EventKind::MapChanged).unwrap();
        assert_ne!(id, held);
        registry.unsubscribe(id);
    }

    let wrapped = registry.subscribe(EventKind::MapChanged).unwrap();
    assert_ne!(wrapped, held);

    registry.unsubscribe(wrapped);
    assert!(registry.is_subscribed(EventKind::MapInfo));
    assert_eq!(registry.len(), 1);
}

#[test]
fn forward_skips_unsubscribed_streams() {
    let registry: SubscriptionRegistry<2> = SubscriptionRegistry::new();
    let channel = MapEventChannel::new();
    let sender = channel.sender();
    registry.subscribe(EventKind::MapChanged).unwrap();

    assert!(!registry.forward(MapEvent::Info(MapInfoEvent::new("Hall")), &sender));
    assert!(registry.forward(MapEvent::Changed(MapChangedEvent::new(at(7))), &sender));

    assert_eq!(channel.len(), 1);
}

// -----------------------------------------------------------------------------
// Channel delivery into the entity
// -----------------------------------------------------------------------------

#[test]
fn pump_applies_queued_events_in_order() {
    let vacuum: FakeVacuum = FakeVacuum::new();
    let writer = RecordingWriter::default();
    let image = platform::map_image_entities(&vacuum, &writer).unwrap();
    let channel = MapEventChannel::new();
    let _activation = image.activate().unwrap();

    let sender = channel.sender();
    vacuum
        .events
        .forward(MapEvent::Info(MapInfoEvent::new("Living Room")), &sender);
    vacuum
        .events
        .forward(MapEvent::Changed(MapChangedEvent::new(at(10))), &sender);
    vacuum
        .events
        .forward(MapEvent::Changed(MapChangedEvent::new(at(11))), &sender);

    assert_eq!(image.pump(&channel.receiver()), 3);
    assert_eq!(image.map_name().as_deref(), Some("Living Room"));
    assert_eq!(image.image_last_updated(), Some(at(11)));
    assert_eq!(writer.writes.get(), 2);
    assert!(channel.is_empty());
}

#[test]
fn handle_next_applies_one_event() {
    let vacuum: FakeVacuum = FakeVacuum::new();
    let writer = RecordingWriter::default();
    let image = platform::map_image_entities(&vacuum, &writer).unwrap();
    let channel = MapEventChannel::new();
    let _activation = image.activate().unwrap();

    channel
        .try_send(MapEvent::Changed(MapChangedEvent::new(at(6))))
        .unwrap();
    channel
        .try_send(MapEvent::Info(MapInfoEvent::new("Garage")))
        .unwrap();

    let receiver = channel.receiver();
    assert!(embassy_futures::block_on(image.handle_next(&receiver)));

    assert_eq!(image.image_last_updated(), Some(at(6)));
    assert_eq!(image.map_name(), None);
    assert_eq!(channel.len(), 1);
}

#[test]
fn queued_events_after_release_are_dropped() {
    let vacuum: FakeVacuum = FakeVacuum::new();
    let writer = RecordingWriter::default();
    let image = platform::map_image_entities(&vacuum, &writer).unwrap();
    let channel = MapEventChannel::new();
    let activation = image.activate().unwrap();

    vacuum
        .events
        .forward(MapEvent::Changed(MapChangedEvent::new(at(10))), &channel.sender());
    activation.release();

    assert!(
        !vacuum
            .events
            .forward(MapEvent::Changed(MapChangedEvent::new(at(11))), &channel.sender())
    );
    assert_eq!(image.pump(&channel.receiver()), 0);
    assert_eq!(image.image_last_updated(), None);
    assert_eq!(writer.writes.get(), 0);
    assert_eq!(vacuum.map.disabled.get(), 1);
}
