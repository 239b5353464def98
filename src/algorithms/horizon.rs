//! Horizon bounding box estimation
//!
//! Approximates the ground region visible out to the geometric horizon as a
//! latitude/longitude rectangle centred on the observer. The renderer uses
//! it to decide which terrain tiles to fetch.
//!
//! Known limitations:
//! - Under [`LongitudeScale::LegacyDegrees`] the longitude scale takes the
//!   cosine of the latitude value in degrees. This matches the behaviour of
//!   the deployed application and is kept as the default.
//! - Boxes crossing the antimeridian are not wrapped.

use crate::core::{
    BoundingBox, GeoCoordinate, KM_PER_DEGREE_LATITUDE, KM_PER_DEGREE_LONGITUDE_EQUATOR,
    MAX_LONGITUDE_HALF_SPAN_DEG, MIN_DEVICE_ALTITUDE_M,
};
use crate::utils::config::{HorizonConfig, LongitudeScale};
use crate::validation::{CoordinateValidator, GeoError, GeoResult};

/// Distance to the horizon (km) for a device at `altitude_m`.
///
/// Altitudes below [`MIN_DEVICE_ALTITUDE_M`] are raised to it.
pub fn horizon_distance_km(altitude_m: f64, distance_factor: f64) -> f64 {
    distance_factor * altitude_m.max(MIN_DEVICE_ALTITUDE_M).sqrt()
}

/// Length of one degree of longitude (km) at the given latitude
pub fn km_per_degree_longitude(latitude: f64, scale: LongitudeScale) -> f64 {
    let cosine = match scale {
        LongitudeScale::LegacyDegrees => latitude.cos(),
        LongitudeScale::Radians => latitude.to_radians().cos(),
    };
    cosine * KM_PER_DEGREE_LONGITUDE_EQUATOR
}

/// Bounding box of the visible horizon around `observer`.
///
/// An unknown altitude is treated as the 2 m floor. The longitude half-span
/// is clamped to 180° when the longitude scale collapses towards zero.
///
/// # Errors
///
/// - [`GeoError::NonFinite`] for a NaN or infinite latitude, longitude or
///   known altitude.
/// - [`GeoError::InvalidDistanceFactor`] when the configured factor is not
///   finite and strictly positive.
/// - [`GeoError::HorizonOverflow`] when factor and altitude are so large the
///   horizon distance is no longer finite.
pub fn horizon_bounding_box(observer: &GeoCoordinate, config: &HorizonConfig) -> GeoResult<BoundingBox> {
    CoordinateValidator::ensure_finite_coordinate(observer)?;
    if !config.distance_factor.is_finite() || config.distance_factor <= 0.0 {
        return Err(GeoError::InvalidDistanceFactor(config.distance_factor));
    }

    let altitude = observer.altitude.unwrap_or(MIN_DEVICE_ALTITUDE_M);
    let distance_km = horizon_distance_km(altitude, config.distance_factor);
    if !distance_km.is_finite() {
        tracing::warn!(
            distance_factor = config.distance_factor,
            altitude,
            "horizon distance overflowed"
        );
        return Err(GeoError::HorizonOverflow {
            distance_factor: config.distance_factor,
            altitude_m: altitude,
        });
    }

    let latitude_span = distance_km / KM_PER_DEGREE_LATITUDE;

    let km_per_lon_degree = km_per_degree_longitude(observer.latitude, config.longitude_scale);
    // the legacy cosine can go negative
    let raw_longitude_span = (distance_km / km_per_lon_degree).abs();
    let longitude_span = if raw_longitude_span.is_finite() && raw_longitude_span <= MAX_LONGITUDE_HALF_SPAN_DEG {
        raw_longitude_span
    } else {
        tracing::warn!(
            latitude = observer.latitude,
            km_per_lon_degree,
            raw_longitude_span,
            "longitude span clamped to {}°",
            MAX_LONGITUDE_HALF_SPAN_DEG
        );
        MAX_LONGITUDE_HALF_SPAN_DEG
    };

    let bbox = BoundingBox {
        max_latitude: observer.latitude + latitude_span,
        min_latitude: observer.latitude - latitude_span,
        max_longitude: observer.longitude + longitude_span,
        min_longitude: observer.longitude - longitude_span,
    };

    tracing::debug!(
        observer = %observer,
        distance_km,
        latitude_span,
        longitude_span,
        "horizon bounding box computed"
    );

    Ok(bbox)
}
