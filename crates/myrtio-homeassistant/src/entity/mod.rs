//! Entity domain types
//!
//! This module contains domain DTOs for Home Assistant entities.

pub mod image;

pub use image::{DEFAULT_CONTENT_TYPE, ImageEntity, ImageEntityBuilder};
