//! Error types for embedding operations.

use axis_types::AxisError;
use section_types::SectionError;
use thiserror::Error;

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Errors that can occur while embedding cross-sections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// The world-point data does not form a `(stations, points, 3)`
    /// array. Mismatches are rejected, never reshaped.
    #[error("embedding shape mismatch: expected ({stations}, {points}, 3), got {actual} world points")]
    ShapeMismatch {
        /// Expected number of stations.
        stations: usize,
        /// Expected number of points per station.
        points: usize,
        /// Actual number of world points supplied.
        actual: usize,
    },

    /// The embedding produced a NaN or infinite coordinate. The whole
    /// call fails; partial results are worse than a hard failure for
    /// downstream structural computations.
    #[error("non-finite world coordinate at station {station}, point {point}")]
    NonFiniteResult {
        /// Station index within the request.
        station: usize,
        /// Point index within the section.
        point: usize,
    },

    /// Stations and frames are not index-aligned.
    #[error("expected one frame per station: {stations} stations, {frames} frames")]
    FrameCountMismatch {
        /// Number of stations supplied.
        stations: usize,
        /// Number of frames supplied.
        frames: usize,
    },

    /// An axis-side failure (degenerate geometry, bad indices,
    /// non-monotonic stations).
    #[error(transparent)]
    Axis(#[from] AxisError),

    /// A section-side failure (missing variable, unit problems).
    #[error(transparent)]
    Section(#[from] SectionError),
}
