//! Local coordinate frames along a reference axis.

use nalgebra::{Matrix3, Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A local coordinate frame at a station on the reference axis.
///
/// The frame consists of three mutually orthonormal vectors forming a
/// right-handed basis:
/// - `tangent`: Points along the axis in the direction of increasing station
/// - `normal`: Perpendicular to tangent; the local Y direction of a section
/// - `binormal`: `tangent × normal`; the local Z direction of a section
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// World position of the station this frame belongs to.
    pub position: Point3<f64>,
    /// Unit tangent vector (forward along the axis).
    pub tangent: Vector3<f64>,
    /// Unit normal vector (perpendicular to tangent).
    pub normal: Vector3<f64>,
    /// Unit binormal vector (`tangent × normal`).
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Create a new frame from its components.
    ///
    /// The vectors are assumed to be orthonormal. Use
    /// [`Self::from_tangent_and_up`] for automatic orthonormalization.
    #[must_use]
    pub fn new(
        position: Point3<f64>,
        tangent: Vector3<f64>,
        normal: Vector3<f64>,
        binormal: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    /// Create a frame from a tangent vector and an "up" hint.
    ///
    /// The normal is `up × tangent` (normalized) and the binormal
    /// completes the right-handed basis, so a straight `+X` axis with the
    /// default `+Z` up yields normal `+Y` and binormal `+Z`: local section
    /// Y/Z map to world Y/Z unchanged.
    #[must_use]
    pub fn from_tangent_and_up(position: Point3<f64>, tangent: Vector3<f64>, up: Vector3<f64>) -> Self {
        let tangent = tangent.normalize();

        let normal = up.cross(&tangent);
        let normal_norm = normal.norm();

        let (normal, binormal) = if normal_norm > 1e-10 {
            let normal = normal / normal_norm;
            let binormal = tangent.cross(&normal);
            (normal, binormal)
        } else {
            // Tangent is parallel to up, choose arbitrary perpendicular
            let perp = if tangent.x.abs() < 0.9 {
                Vector3::x()
            } else {
                Vector3::y()
            };
            let normal = perp.cross(&tangent).normalize();
            let binormal = tangent.cross(&normal);
            (normal, binormal)
        };

        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    /// Transform a local point to world coordinates.
    ///
    /// The local coordinate system has:
    /// - X axis along the tangent
    /// - Y axis along the normal
    /// - Z axis along the binormal
    #[must_use]
    pub fn local_to_world(&self, local: Point3<f64>) -> Point3<f64> {
        self.position + self.tangent * local.x + self.normal * local.y + self.binormal * local.z
    }

    /// Transform a local section point (Y, Z in the section plane, X
    /// implicitly zero) to world coordinates.
    #[must_use]
    pub fn section_to_world(&self, local: Point2<f64>) -> Point3<f64> {
        self.position + self.normal * local.x + self.binormal * local.y
    }

    /// The frame as a 3x3 matrix with tangent, normal, and binormal as
    /// columns. Boundary form for exporters.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.tangent, self.normal, self.binormal])
    }

    /// Check if the frame is orthonormal within tolerance.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let t_len = (self.tangent.norm() - 1.0).abs();
        let n_len = (self.normal.norm() - 1.0).abs();
        let b_len = (self.binormal.norm() - 1.0).abs();
        let tn_dot = self.tangent.dot(&self.normal).abs();
        let tb_dot = self.tangent.dot(&self.binormal).abs();
        let nb_dot = self.normal.dot(&self.binormal).abs();

        t_len < tolerance
            && n_len < tolerance
            && b_len < tolerance
            && tn_dot < tolerance
            && tb_dot < tolerance
            && nb_dot < tolerance
    }

    /// Orthonormalize the frame using Gram-Schmidt.
    #[must_use]
    pub fn orthonormalized(&self) -> Self {
        let tangent = self.tangent.normalize();
        let normal = (self.normal - tangent * tangent.dot(&self.normal)).normalize();
        let binormal = tangent.cross(&normal);

        Self {
            position: self.position,
            tangent,
            normal,
            binormal,
        }
    }

    /// A copy of this frame with the binormal sign flipped (mirrored
    /// orientation for symmetric embedding).
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            position: self.position,
            tangent: self.tangent,
            normal: self.normal,
            binormal: -self.binormal,
        }
    }
}
