//! Physical constants and system parameters

/// Average length of one degree of latitude (km)
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.0;

/// Length of one degree of longitude at the equator (km)
pub const KM_PER_DEGREE_LONGITUDE_EQUATOR: f64 = 111.321;

/// Devices are assumed to be held at least this high above ground (m)
pub const MIN_DEVICE_ALTITUDE_M: f64 = 2.0;

/// Horizon distance factor for the geometric horizon, in km per sqrt(m)
pub const HORIZON_FACTOR_STANDARD: f64 = 3.57;

/// Horizon distance factor for the near-field variant
pub const HORIZON_FACTOR_NEAR: f64 = 1.0;

/// Upper bound on the longitude half-span of a horizon box (degrees)
pub const MAX_LONGITUDE_HALF_SPAN_DEG: f64 = 180.0;

/// Distance in front of the viewer at which markers are placed (m)
pub const DEFAULT_FORWARD_OFFSET_M: f64 = 10.0;
