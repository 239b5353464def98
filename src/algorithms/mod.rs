//! Core geodesy and placement algorithms

pub mod bearing;
pub mod heading;
pub mod horizon;
pub mod placement;

pub use bearing::bearing;
pub use heading::{normalize_heading_degrees, terrain_yaw};
pub use horizon::{horizon_bounding_box, horizon_distance_km};
pub use placement::{placement_for_bearing, placement_transform, Placement};
