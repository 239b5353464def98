//! Compass heading normalization

use crate::validation::{CoordinateValidator, GeoResult};

/// Fold a compass heading in degrees into `[0, 360)`.
pub fn normalize_heading_degrees(heading: f64) -> GeoResult<f64> {
    let heading = CoordinateValidator::ensure_finite("heading", heading)?;

    let normalized = heading.rem_euclid(360.0);
    if normalized >= 360.0 {
        return Ok(0.0);
    }
    Ok(normalized + 0.0)
}

/// Yaw (radians) that orients the terrain model to true north for a device
/// facing `heading` degrees.
pub fn terrain_yaw(heading: f64) -> GeoResult<f64> {
    Ok(normalize_heading_degrees(heading)?.to_radians())
}
