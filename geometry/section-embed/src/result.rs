//! The shape-validated world-embedding result.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};

/// World coordinates of embedded section points: conceptually a
/// `(stations, points, 3)` array, stored as a flat row-major vector with
/// both extents.
///
/// Construction validates that the data length is exactly
/// `stations × points`; a mismatch is rejected, never reshaped. Zero
/// points is a valid shape (`(S, 0, 3)`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldEmbedding {
    n_stations: usize,
    n_points: usize,
    points: Vec<Point3<f64>>,
}

impl WorldEmbedding {
    /// Build from per-station rows of world points.
    ///
    /// # Errors
    ///
    /// [`EmbedError::ShapeMismatch`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Point3<f64>>>) -> EmbedResult<Self> {
        let n_stations = rows.len();
        let n_points = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != n_points) {
            let actual = rows.iter().map(Vec::len).sum();
            return Err(EmbedError::ShapeMismatch {
                stations: n_stations,
                points: n_points,
                actual,
            });
        }

        Ok(Self {
            n_stations,
            n_points,
            points: rows.into_iter().flatten().collect(),
        })
    }

    /// Build from a flat row-major vector with explicit extents.
    ///
    /// # Errors
    ///
    /// [`EmbedError::ShapeMismatch`] unless
    /// `points.len() == n_stations * n_points`.
    pub fn from_flat(
        n_stations: usize,
        n_points: usize,
        points: Vec<Point3<f64>>,
    ) -> EmbedResult<Self> {
        if points.len() != n_stations * n_points {
            return Err(EmbedError::ShapeMismatch {
                stations: n_stations,
                points: n_points,
                actual: points.len(),
            });
        }
        Ok(Self {
            n_stations,
            n_points,
            points,
        })
    }

    /// The `(stations, points, 3)` shape.
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_stations, self.n_points, 3)
    }

    /// Number of stations.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.n_stations
    }

    /// Number of points per station.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.n_points
    }

    /// World point for one station/point pair.
    #[must_use]
    pub fn get(&self, station: usize, point: usize) -> Option<&Point3<f64>> {
        if station >= self.n_stations || point >= self.n_points {
            return None;
        }
        self.points.get(station * self.n_points + point)
    }

    /// All world points at one station, in section point order.
    #[must_use]
    pub fn station_points(&self, station: usize) -> Option<&[Point3<f64>]> {
        if station >= self.n_stations {
            return None;
        }
        let start = station * self.n_points;
        self.points.get(start..start + self.n_points)
    }

    /// Iterate over all world points in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// The first non-finite world point, as a `(station, point)` pair.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.points
            .iter()
            .position(|p| !p.iter().all(|c| c.is_finite()))
            .map(|flat| (flat / self.n_points.max(1), flat % self.n_points.max(1)))
    }
}
