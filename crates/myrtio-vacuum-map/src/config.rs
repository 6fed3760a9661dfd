//! Compile-time configuration of the map image entity

/// MIME type of the rendered map
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Entity key, also used as the entity id suffix in topics
pub const MAP_ENTITY_KEY: &str = "map";

/// Translation key of the entity name
pub const MAP_TRANSLATION_KEY: &str = "map";

/// Attribute carrying the calibration points of the current map
pub const ATTR_CALIBRATION_POINTS: &str = "calibration_points";

/// Attributes the recorder must skip; calibration points change with every
/// map render and carry no history value.
pub const UNRECORDED_ATTRIBUTES: &[&str] = &[ATTR_CALIBRATION_POINTS];

/// Capacity of the event channel between the device client and the entity
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// Event streams a single map image subscribes to
pub const MAX_SUBSCRIPTIONS: usize = 2;

/// Capacity of topic strings in the discovery payload
pub const MAX_TOPIC_LEN: usize = 128;
