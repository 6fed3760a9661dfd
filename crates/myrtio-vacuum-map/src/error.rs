//! Error types for the map image entity

use core::fmt;

/// Error type for map image operations
///
/// `E` is the error type of the device's map collaborator.
#[derive(Debug)]
pub enum MapImageError<E> {
    /// The device map failed to enable or refresh
    Device(E),
    /// The entity is already subscribed to the device
    AlreadyActive,
    /// The event source refused another subscription
    MaxSubscriptionsReached,
    /// JSON serialization error
    Serialization,
}

impl<E: fmt::Debug> fmt::Display for MapImageError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapImageError::Device(e) => write!(f, "Device map error: {:?}", e),
            MapImageError::AlreadyActive => write!(f, "Map image is already active"),
            MapImageError::MaxSubscriptionsReached => write!(f, "Maximum subscriptions reached"),
            MapImageError::Serialization => write!(f, "JSON serialization error"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for MapImageError<E> {}
