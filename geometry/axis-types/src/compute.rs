//! Pointwise frame computation over the axis polyline.
//!
//! Tangents use a forward difference at the first station, a backward
//! difference at the last, and a central difference in the interior
//! (second-order accurate where it matters; the one-sided boundary frames
//! are only used as transport seeds).

use nalgebra::{Point3, Vector3};

use crate::error::{AxisError, AxisResult};
use crate::frame::Frame;

/// Norm threshold below which a frame vector counts as degenerate.
pub const DEGENERACY_EPS: f64 = 1e-10;

/// Tangent/up dot-product magnitude above which the reference up vector
/// is considered parallel to the tangent and replaced.
pub const UP_PARALLEL_LIMIT: f64 = 0.9;

/// Unit tangent at a station, by finite differences over the coordinates.
///
/// # Errors
///
/// - [`AxisError::StationOutOfRange`] if `index` is outside `coords`
/// - [`AxisError::DegenerateGeometry`] if the difference vector collapses
///   (coincident stations), or the axis has fewer than two coordinates
pub fn tangent_at(coords: &[Point3<f64>], index: usize) -> AxisResult<Vector3<f64>> {
    let len = coords.len();
    if index >= len {
        return Err(AxisError::StationOutOfRange { index, len });
    }
    if len < 2 {
        return Err(AxisError::DegenerateGeometry {
            index,
            vector: "tangent",
        });
    }

    let diff = if index == 0 {
        coords[1] - coords[0]
    } else if index == len - 1 {
        coords[len - 1] - coords[len - 2]
    } else {
        (coords[index + 1] - coords[index - 1]) * 0.5
    };

    let norm = diff.norm();
    if norm < DEGENERACY_EPS {
        return Err(AxisError::DegenerateGeometry {
            index,
            vector: "tangent",
        });
    }
    Ok(diff / norm)
}

/// The reference up vector for a given tangent: `+Z`, or `+Y` when the
/// tangent is nearly parallel to `+Z` (a degenerate cross product
/// otherwise).
#[must_use]
pub fn reference_up(tangent: &Vector3<f64>) -> Vector3<f64> {
    if tangent.dot(&Vector3::z()).abs() > UP_PARALLEL_LIMIT {
        Vector3::y()
    } else {
        Vector3::z()
    }
}

/// Unit normal at a station: `up × tangent`, with the up-substitution rule
/// of [`reference_up`].
///
/// # Errors
///
/// Same conditions as [`tangent_at`], plus [`AxisError::DegenerateGeometry`]
/// when the cross product collapses.
pub fn normal_at(coords: &[Point3<f64>], index: usize) -> AxisResult<Vector3<f64>> {
    let tangent = tangent_at(coords, index)?;
    normal_from_tangent(&tangent, index)
}

fn normal_from_tangent(tangent: &Vector3<f64>, index: usize) -> AxisResult<Vector3<f64>> {
    let up = reference_up(tangent);
    let normal = up.cross(tangent);

    let norm = normal.norm();
    if norm < DEGENERACY_EPS {
        return Err(AxisError::DegenerateGeometry {
            index,
            vector: "normal",
        });
    }
    Ok(normal / norm)
}

/// Full orthonormal frame at a station.
///
/// The binormal is `tangent × normal`; all three vectors are normalized
/// before assembly.
///
/// # Errors
///
/// [`AxisError::DegenerateGeometry`] if any vector's norm falls below
/// [`DEGENERACY_EPS`] before normalization.
pub fn frame_at(coords: &[Point3<f64>], index: usize) -> AxisResult<Frame> {
    let tangent = tangent_at(coords, index)?;
    let normal = normal_from_tangent(&tangent, index)?;
    let binormal = tangent.cross(&normal);

    let norm = binormal.norm();
    if norm < DEGENERACY_EPS {
        return Err(AxisError::DegenerateGeometry {
            index,
            vector: "binormal",
        });
    }

    Ok(Frame::new(coords[index], tangent, normal, binormal / norm))
}
