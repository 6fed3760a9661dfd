//! Error types for the Home Assistant library

use core::fmt;

/// Error type for Home Assistant operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaError {
    /// JSON serialization error
    Serialization,
    /// Buffer too small for the serialized payload
    BufferTooSmall,
}

impl fmt::Display for HaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaError::Serialization => write!(f, "JSON serialization error"),
            HaError::BufferTooSmall => write!(f, "Buffer too small"),
        }
    }
}

impl core::error::Error for HaError {}
