//! Great-circle initial bearing between two coordinates
//!
//! Uses the spherical forward-azimuth formula. There is no ellipsoidal
//! correction: the result is accurate enough to point an AR marker in the
//! right direction, not for surveying.

use crate::core::{Bearing, GeoCoordinate};
use crate::validation::{CoordinateValidator, GeoResult};

/// Initial bearing from `origin` to `destination`, clockwise from true north.
///
/// Identical coordinates yield `atan2(0, 0)`, i.e. a bearing of 0.
///
/// # Errors
///
/// Returns [`GeoError::NonFinite`](crate::GeoError::NonFinite) when either
/// latitude or longitude is NaN or infinite. Finite values outside the
/// nominal WGS84 ranges are accepted as-is.
pub fn bearing(origin: &GeoCoordinate, destination: &GeoCoordinate) -> GeoResult<Bearing> {
    CoordinateValidator::ensure_finite_position(origin)?;
    CoordinateValidator::ensure_finite_position(destination)?;

    let origin_lat = origin.latitude.to_radians();
    let origin_lon = origin.longitude.to_radians();
    let destination_lat = destination.latitude.to_radians();
    let destination_lon = destination.longitude.to_radians();

    let d_lon = destination_lon - origin_lon;

    let y = d_lon.sin() * destination_lat.cos();
    let x = origin_lat.cos() * destination_lat.sin()
        - origin_lat.sin() * destination_lat.cos() * d_lon.cos();

    Ok(Bearing::from_radians(y.atan2(x)))
}
