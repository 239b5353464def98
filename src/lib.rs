//! World-scale AR placement
//!
//! Geodesy core for overlaying points of interest and horizon terrain on a
//! camera view: great-circle bearings, horizon bounding boxes for terrain
//! loading, and viewer-relative marker transforms.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
// `core` alone would be ambiguous with the built-in crate
pub use crate::core::{Bearing, BoundingBox, GeoCoordinate, PointOfInterest};
pub use algorithms::{
    bearing, horizon_bounding_box, normalize_heading_degrees, placement_for_bearing,
    placement_transform, terrain_yaw, Placement,
};
pub use validation::{CoordinateValidator, GeoError, GeoResult};
pub use utils::{
    ConfigError, ConfigurationManager, HorizonConfig, HorizonPreset, LongitudeScale, SceneConfig,
};
pub use api::{MarkerPlacement, SceneService, SceneUpdate};
