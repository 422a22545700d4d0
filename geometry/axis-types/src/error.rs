//! Error types for axis and frame operations.

use thiserror::Error;

/// Result type for axis and frame operations.
pub type AxisResult<T> = Result<T, AxisError>;

/// Errors that can occur during axis and frame computations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// Stations and coordinates are not index-aligned.
    #[error("stations and coordinates must be index-aligned: {stations} stations, {coordinates} coordinates")]
    LengthMismatch {
        /// Number of stations supplied.
        stations: usize,
        /// Number of coordinates supplied.
        coordinates: usize,
    },

    /// Station positions decrease somewhere along the axis.
    #[error("stations must be non-decreasing: station {index} is below its predecessor")]
    NonMonotonicStations {
        /// Index of the first offending station.
        index: usize,
    },

    /// A station index is outside the axis.
    #[error("station index {index} out of range for axis with {len} stations")]
    StationOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of stations on the axis.
        len: usize,
    },

    /// The transport range is inverted.
    #[error("invalid transport range: start {start} is past end {end}")]
    InvalidRange {
        /// Start index of the range.
        start: usize,
        /// End index of the range.
        end: usize,
    },

    /// A frame vector collapsed below the degeneracy threshold before
    /// normalization (coincident stations or a pathological tangent).
    #[error("degenerate geometry at station {index}: {vector} norm below threshold")]
    DegenerateGeometry {
        /// Station index where the degeneracy occurred.
        index: usize,
        /// Which frame vector collapsed.
        vector: &'static str,
    },

    /// The embedding produced a NaN or infinite coordinate. Partial
    /// results are never returned.
    #[error("non-finite world coordinate at station {station}, point {point}")]
    NonFiniteResult {
        /// Station index within the request.
        station: usize,
        /// Point index within the section.
        point: usize,
    },
}
