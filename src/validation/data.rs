//! Input validation for coordinates and headings
//!
//! The geometry pipeline accepts any finite degree values; NaN or infinite
//! inputs are rejected up front so they never reach a bounding box or
//! transform handed to the renderer. Range checks are separate and only
//! applied where a coordinate is persisted (configured points of interest).

use crate::core::GeoCoordinate;
use crate::validation::error::{GeoError, GeoResult};

/// Coordinate validation utilities
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Reject a NaN or infinite scalar
    pub fn ensure_finite(field: &'static str, value: f64) -> GeoResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeoError::NonFinite { field, value })
        }
    }

    /// Reject non-finite latitude or longitude. Altitude is not inspected.
    pub fn ensure_finite_position(coordinate: &GeoCoordinate) -> GeoResult<()> {
        Self::ensure_finite("latitude", coordinate.latitude)?;
        Self::ensure_finite("longitude", coordinate.longitude)?;
        Ok(())
    }

    /// Reject non-finite latitude, longitude or (known) altitude
    pub fn ensure_finite_coordinate(coordinate: &GeoCoordinate) -> GeoResult<()> {
        Self::ensure_finite_position(coordinate)?;
        if let Some(altitude) = coordinate.altitude {
            Self::ensure_finite("altitude", altitude)?;
        }
        Ok(())
    }

    /// Validate WGS84 geodetic ranges
    pub fn validate_wgs84(coordinate: &GeoCoordinate) -> GeoResult<()> {
        Self::ensure_finite_coordinate(coordinate)?;

        if !(-90.0..=90.0).contains(&coordinate.latitude) {
            return Err(GeoError::OutOfRange {
                field: "latitude",
                value: coordinate.latitude,
            });
        }

        if !(-180.0..=180.0).contains(&coordinate.longitude) {
            return Err(GeoError::OutOfRange {
                field: "longitude",
                value: coordinate.longitude,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_coordinate_accepted() {
        let coordinate = GeoCoordinate::with_altitude(37.7749, -122.4194, -5.0);
        assert!(CoordinateValidator::ensure_finite_coordinate(&coordinate).is_ok());
    }

    #[test]
    fn test_nan_latitude_rejected() {
        let coordinate = GeoCoordinate::new(f64::NAN, 0.0);
        assert!(matches!(
            CoordinateValidator::ensure_finite_position(&coordinate),
            Err(GeoError::NonFinite { field: "latitude", .. })
        ));
    }

    #[test]
    fn test_infinite_altitude_rejected_only_when_checked() {
        let coordinate = GeoCoordinate::with_altitude(0.0, 0.0, f64::INFINITY);
        assert!(CoordinateValidator::ensure_finite_position(&coordinate).is_ok());
        assert!(matches!(
            CoordinateValidator::ensure_finite_coordinate(&coordinate),
            Err(GeoError::NonFinite { field: "altitude", .. })
        ));
    }

    #[test]
    fn test_wgs84_ranges() {
        assert!(CoordinateValidator::validate_wgs84(&GeoCoordinate::new(45.0, 179.9)).is_ok());
        assert!(matches!(
            CoordinateValidator::validate_wgs84(&GeoCoordinate::new(91.0, 0.0)),
            Err(GeoError::OutOfRange { field: "latitude", .. })
        ));
        assert!(matches!(
            CoordinateValidator::validate_wgs84(&GeoCoordinate::new(0.0, -200.0)),
            Err(GeoError::OutOfRange { field: "longitude", .. })
        ));
    }
}
