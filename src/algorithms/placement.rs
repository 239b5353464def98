//! World-space placement of point-of-interest markers
//!
//! Markers are not placed at their true geographic distance. Each one sits a
//! fixed forward offset from the viewer, turned towards the compass bearing of
//! its target, in a viewer-centred frame where +Y is up, -Z is true north and
//! +X is east.

use nalgebra::{Isometry3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};

use crate::algorithms::bearing::bearing;
use crate::core::{Bearing, GeoCoordinate};
use crate::validation::{GeoError, GeoResult};

/// Rigid transform positioning a marker relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    azimuth: Bearing,
    isometry: Isometry3<f64>,
}

impl Placement {
    /// Bearing the placement was built from
    pub fn azimuth(&self) -> Bearing {
        self.azimuth
    }

    pub fn isometry(&self) -> &Isometry3<f64> {
        &self.isometry
    }

    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.isometry.rotation
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.isometry.translation.vector
    }

    /// Where a marker modelled at its local origin ends up
    pub fn position(&self) -> Point3<f64> {
        self.isometry.transform_point(&Point3::origin())
    }

    /// 4×4 homogeneous matrix (column vectors)
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        self.isometry.to_homogeneous()
    }
}

/// Rotation about the up axis that turns the forward direction (-Z) towards
/// `azimuth`, clockwise when seen from above.
fn yaw_rotation(azimuth: Bearing) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -azimuth.radians())
}

/// Placement for a marker `forward_offset_m` away in the direction `azimuth`.
pub fn placement_for_bearing(azimuth: Bearing, forward_offset_m: f64) -> GeoResult<Placement> {
    if !forward_offset_m.is_finite() || forward_offset_m < 0.0 {
        return Err(GeoError::InvalidForwardOffset(forward_offset_m));
    }

    let rotation = Isometry3::from_parts(Translation3::identity(), yaw_rotation(azimuth));
    let offset = Isometry3::translation(0.0, 0.0, -forward_offset_m);

    Ok(Placement {
        azimuth,
        isometry: rotation * offset,
    })
}

/// Placement of a marker for `destination` as seen from `origin`.
///
/// The marker lands `forward_offset_m` meters from the viewer in the
/// horizontal plane, along the initial great-circle bearing to the target.
///
/// # Errors
///
/// - [`GeoError::NonFinite`] for NaN or infinite coordinates.
/// - [`GeoError::InvalidForwardOffset`] for a negative or non-finite offset.
pub fn placement_transform(
    origin: &GeoCoordinate,
    destination: &GeoCoordinate,
    forward_offset_m: f64,
) -> GeoResult<Placement> {
    let azimuth = bearing(origin, destination)?;
    placement_for_bearing(azimuth, forward_offset_m)
}
