//! Error types for geodesy and placement computations

use thiserror::Error;

/// Result type for geodesy operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Input rejected by a geodesy or placement computation.
///
/// Every variant is a caller input problem; the computations themselves
/// never fail on valid input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// A coordinate, altitude or heading was NaN or infinite
    #[error("non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Latitude or longitude outside the WGS84 range
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// Forward offset must be a finite, non-negative distance
    #[error("invalid forward offset: {0} m")]
    InvalidForwardOffset(f64),

    /// Horizon distance factor must be finite and strictly positive
    #[error("invalid horizon distance factor: {0}")]
    InvalidDistanceFactor(f64),

    /// Distance factor and altitude together overflow the horizon distance
    #[error("horizon distance overflows for factor {distance_factor} at altitude {altitude_m} m")]
    HorizonOverflow { distance_factor: f64, altitude_m: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeoError::NonFinite { field: "latitude", value: f64::NAN };
        assert_eq!(err.to_string(), "non-finite latitude: NaN");

        let err = GeoError::InvalidForwardOffset(-3.0);
        assert_eq!(err.to_string(), "invalid forward offset: -3 m");
    }
}
