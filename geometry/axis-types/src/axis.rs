//! The reference axis: stations, coordinates, cached frames, and
//! parallel transport.

use std::sync::{Mutex, PoisonError};

use nalgebra::{Point2, Point3, UnitVector3, Vector3};
use tracing::debug;

use crate::cache::{FrameCache, DEFAULT_CACHE_CAPACITY};
use crate::compute::{self, DEGENERACY_EPS};
use crate::error::{AxisError, AxisResult};
use crate::frame::Frame;

/// Check that stations are non-decreasing (duplicates are permitted,
/// representing zero-length segments).
///
/// # Errors
///
/// [`AxisError::NonMonotonicStations`] with the first offending index.
pub fn validate_monotonic(stations: &[f64]) -> AxisResult<()> {
    for (i, pair) in stations.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(AxisError::NonMonotonicStations { index: i + 1 });
        }
    }
    Ok(())
}

/// A 3D reference axis: an ordered list of stations with index-aligned
/// world coordinates.
///
/// Station and coordinate data are immutable after construction. Frames
/// are derived lazily and memoized in a bounded per-axis cache keyed by
/// station index; the cache is serialized behind a mutex with a
/// compute-then-insert-if-absent policy, so concurrent queries may
/// redundantly recompute a frame but never block each other during the
/// numeric work.
#[derive(Debug)]
pub struct Axis {
    stations: Vec<f64>,
    coordinates: Vec<Point3<f64>>,
    cache: Mutex<FrameCache>,
}

impl Axis {
    /// Create an axis with the default cache capacity.
    ///
    /// # Errors
    ///
    /// - [`AxisError::LengthMismatch`] if stations and coordinates differ
    ///   in length
    /// - [`AxisError::NonMonotonicStations`] if stations decrease
    pub fn new(stations: Vec<f64>, coordinates: Vec<Point3<f64>>) -> AxisResult<Self> {
        Self::with_cache_capacity(stations, coordinates, DEFAULT_CACHE_CAPACITY)
    }

    /// Create an axis with an explicit frame-cache capacity.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_cache_capacity(
        stations: Vec<f64>,
        coordinates: Vec<Point3<f64>>,
        capacity: usize,
    ) -> AxisResult<Self> {
        if stations.len() != coordinates.len() {
            return Err(AxisError::LengthMismatch {
                stations: stations.len(),
                coordinates: coordinates.len(),
            });
        }
        validate_monotonic(&stations)?;

        Ok(Self {
            stations,
            coordinates,
            cache: Mutex::new(FrameCache::new(capacity)),
        })
    }

    /// The station positions.
    #[must_use]
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    /// The world coordinates, index-aligned with the stations.
    #[must_use]
    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    /// Number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the axis has no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station position at an index.
    #[must_use]
    pub fn station(&self, index: usize) -> Option<f64> {
        self.stations.get(index).copied()
    }

    /// World coordinate at an index.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> Option<Point3<f64>> {
        self.coordinates.get(index).copied()
    }

    /// Number of frames currently memoized.
    #[must_use]
    pub fn cached_frames(&self) -> usize {
        self.lock_cache().len()
    }

    /// The local frame at a station index, computed on first access and
    /// memoized.
    ///
    /// # Errors
    ///
    /// - [`AxisError::StationOutOfRange`] for an index outside the axis
    /// - [`AxisError::DegenerateGeometry`] from the frame computation
    pub fn frame_at(&self, index: usize) -> AxisResult<Frame> {
        if index >= self.len() {
            return Err(AxisError::StationOutOfRange {
                index,
                len: self.len(),
            });
        }

        if let Some(frame) = self.lock_cache().get(index) {
            return Ok(frame);
        }

        // Compute outside the lock; a concurrent query for the same index
        // produces the identical frame, so the race is harmless.
        let frame = compute::frame_at(&self.coordinates, index)?;
        self.lock_cache().insert_if_absent(index, frame);
        Ok(frame)
    }

    /// Propagate a frame along `[start, end]` (inclusive) by parallel
    /// transport.
    ///
    /// The scan seeds with [`Self::frame_at`]`(start)` and rotates each
    /// previous frame by the minimal rotation taking its tangent onto the
    /// next segment direction (Rodrigues' formula about their cross
    /// product), keeping the frame continuous along curved paths where
    /// independent pointwise frames would flip. Degenerate segments
    /// (near-zero length or rotation axis) carry the previous orientation
    /// forward unchanged. The scan is inherently sequential: each frame
    /// depends on its predecessor.
    ///
    /// # Errors
    ///
    /// - [`AxisError::InvalidRange`] if `start > end`
    /// - [`AxisError::StationOutOfRange`] if `end` is outside the axis
    /// - [`AxisError::DegenerateGeometry`] from the seed frame
    pub fn parallel_transport(&self, start: usize, end: usize) -> AxisResult<Vec<Frame>> {
        if start > end {
            return Err(AxisError::InvalidRange { start, end });
        }
        if end >= self.len() {
            return Err(AxisError::StationOutOfRange {
                index: end,
                len: self.len(),
            });
        }

        let mut frames = Vec::with_capacity(end - start + 1);
        frames.push(self.frame_at(start)?);

        for i in start + 1..=end {
            let prev = frames[frames.len() - 1];
            let position = self.coordinates[i];
            let segment = position - self.coordinates[i - 1];

            let next = if segment.norm() < DEGENERACY_EPS {
                // Zero-length segment: keep the previous orientation.
                Frame::new(position, prev.tangent, prev.normal, prev.binormal)
            } else {
                transport_step(&prev, position, segment.normalize())
            };
            frames.push(next);
        }

        debug!(
            start,
            end,
            frames = frames.len(),
            "parallel transport complete"
        );
        Ok(frames)
    }

    /// Embed local 2D section points at the requested stations.
    ///
    /// Per station, `world = coordinate + y·normal + z·binormal` (the
    /// local X is implicitly zero). The result has one row per requested
    /// station with one world point per local point.
    ///
    /// # Errors
    ///
    /// - [`AxisError::StationOutOfRange`] for any index outside the axis
    /// - [`AxisError::DegenerateGeometry`] from the frame computation
    /// - [`AxisError::NonFiniteResult`] if any output component is NaN or
    ///   infinite; no partial result is returned
    pub fn embed_points(
        &self,
        local_points: &[Point2<f64>],
        station_indices: &[usize],
    ) -> AxisResult<Vec<Vec<Point3<f64>>>> {
        let mut rows = Vec::with_capacity(station_indices.len());

        for (row_idx, &index) in station_indices.iter().enumerate() {
            let frame = self.frame_at(index)?;
            let mut row = Vec::with_capacity(local_points.len());

            for (point_idx, local) in local_points.iter().enumerate() {
                let world = frame.section_to_world(*local);
                if !world.iter().all(|c| c.is_finite()) {
                    return Err(AxisError::NonFiniteResult {
                        station: row_idx,
                        point: point_idx,
                    });
                }
                row.push(world);
            }
            rows.push(row);
        }

        Ok(rows)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, FrameCache> {
        // A poisoned cache only means another thread panicked mid-insert;
        // the map itself stays consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rotate a frame so its tangent aligns with `new_tangent`, rotating the
/// normal and binormal by the same minimal rotation.
fn transport_step(prev: &Frame, position: Point3<f64>, new_tangent: Vector3<f64>) -> Frame {
    let axis = prev.tangent.cross(&new_tangent);
    let axis_norm = axis.norm();

    if axis_norm < DEGENERACY_EPS {
        // Tangents are parallel (or antiparallel): no rotation axis.
        if prev.tangent.dot(&new_tangent) >= 0.0 {
            return Frame::new(position, new_tangent, prev.normal, prev.binormal);
        }
        // Antiparallel: a half-turn about the previous normal, so the
        // basis stays right-handed through the reversal.
        return Frame::new(position, new_tangent, prev.normal, -prev.binormal);
    }

    let axis = UnitVector3::new_normalize(axis);
    let angle = prev.tangent.dot(&new_tangent).clamp(-1.0, 1.0).acos();

    // Rodrigues rotation formula
    let rotate = |v: Vector3<f64>| {
        let k = axis.into_inner();
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        v * cos_a + k.cross(&v) * sin_a + k * (k.dot(&v)) * (1.0 - cos_a)
    };

    Frame::new(
        position,
        new_tangent,
        rotate(prev.normal),
        rotate(prev.binormal),
    )
}
