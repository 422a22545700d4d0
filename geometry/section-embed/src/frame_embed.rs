//! Frame-based embedding of cross-sections along an axis.

use axis_types::{Axis, AxisError, Frame};
use nalgebra::Point3;
use section_types::{CrossSection, Unit};
use tracing::{debug, info};

use crate::error::{EmbedError, EmbedResult};
use crate::result::WorldEmbedding;

/// How alternating stations are oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedMode {
    /// Every station uses its frame as computed.
    Basic,
    /// The binormal (local Z) axis sign is flipped on odd station
    /// indices, embedding mirrored left/right sections on alternating
    /// stations.
    Symmetric,
}

/// Embeds a cross-section at a sequence of stations with known frames.
///
/// Per station `s` at index `i` and local point `(y, z)`:
///
/// ```text
/// world = position + scale(s)·(y·N + z·B) + offset_y(s)·N + (offset_z(s) + H(s))·B
/// ```
///
/// where `N`/`B` are the frame's normal and binormal (`B` sign-flipped on
/// odd `i` in [`EmbedMode::Symmetric`]). The variables `scale`,
/// `offset_y`, `offset_z`, and `H` are resolved from the section with
/// scalar defaults 1.0, 0.0, 0.0, 0.0. Substituting a default silently
/// changes geometry, which is why the policy is fixed here and documented.
/// Section points and the length-valued variables are each converted to
/// the target unit before the additive combination; `scale` is
/// dimensionless and never converted.
///
/// Stations are independent of one another in this stage (unlike parallel
/// transport), so it is freely batchable.
#[derive(Debug, Clone, Copy)]
pub struct FrameEmbedder {
    mode: EmbedMode,
    target_unit: Unit,
}

impl FrameEmbedder {
    /// Create an embedder with the given mode and target unit.
    #[must_use]
    pub fn new(mode: EmbedMode, target_unit: Unit) -> Self {
        Self { mode, target_unit }
    }

    /// Basic-mode embedder.
    #[must_use]
    pub fn basic(target_unit: Unit) -> Self {
        Self::new(EmbedMode::Basic, target_unit)
    }

    /// Symmetric-mode embedder.
    #[must_use]
    pub fn symmetric(target_unit: Unit) -> Self {
        Self::new(EmbedMode::Symmetric, target_unit)
    }

    /// The embedding mode.
    #[must_use]
    pub fn mode(&self) -> EmbedMode {
        self.mode
    }

    /// The unit the world coordinates are expressed in.
    #[must_use]
    pub fn target_unit(&self) -> Unit {
        self.target_unit
    }

    /// Embed the section at every `(station, frame)` pair.
    ///
    /// # Errors
    ///
    /// - [`EmbedError::FrameCountMismatch`] if `stations` and `frames`
    ///   differ in length
    /// - [`EmbedError::NonFiniteResult`] if any world coordinate is NaN
    ///   or infinite (the whole call fails)
    /// - [`EmbedError::ShapeMismatch`] if the assembled result does not
    ///   form a `(stations, points, 3)` array
    pub fn embed(
        &self,
        section: &CrossSection,
        stations: &[f64],
        frames: &[Frame],
    ) -> EmbedResult<WorldEmbedding> {
        if stations.len() != frames.len() {
            return Err(EmbedError::FrameCountMismatch {
                stations: stations.len(),
                frames: frames.len(),
            });
        }

        let (local_points, _ids) = section.points_array();
        info!(
            section = section.name(),
            stations = stations.len(),
            points = local_points.len(),
            mode = ?self.mode,
            unit = self.target_unit.tag(),
            "embedding cross-section"
        );

        let point_unit = section.point_unit();
        let mut rows = Vec::with_capacity(stations.len());

        for (i, (&station, frame)) in stations.iter().zip(frames).enumerate() {
            // Per-station scalar parameters; defaults are true scalars so
            // the combination below never picks up a stray extra axis.
            let scale = section.variable_or("scale", station, 1.0);
            let offset_y = section.variable_or_in("offset_y", station, 0.0, self.target_unit);
            let offset_z = section.variable_or_in("offset_z", station, 0.0, self.target_unit);
            let height = section.variable_or_in("H", station, 0.0, self.target_unit);

            let binormal = if self.mode == EmbedMode::Symmetric && i % 2 == 1 {
                -frame.binormal
            } else {
                frame.binormal
            };

            let row: Vec<Point3<f64>> = local_points
                .iter()
                .map(|local| {
                    let y = point_unit.convert(local.x, self.target_unit);
                    let z = point_unit.convert(local.y, self.target_unit);
                    frame.position
                        + frame.normal * (scale * y + offset_y)
                        + binormal * (scale * z + offset_z + height)
                })
                .collect();
            rows.push(row);
        }

        let embedding = WorldEmbedding::from_rows(rows)?;
        if let Some((station, point)) = embedding.first_non_finite() {
            return Err(EmbedError::NonFiniteResult { station, point });
        }

        debug!(shape = ?embedding.shape(), "embedding complete");
        Ok(embedding)
    }

    /// Embed the section at the given station indices of an axis, pulling
    /// frames through the axis' cache.
    ///
    /// # Errors
    ///
    /// Everything [`Self::embed`] can fail with, plus the axis-side
    /// errors of [`Axis::frame_at`].
    pub fn embed_axis(
        &self,
        section: &CrossSection,
        axis: &Axis,
        station_indices: &[usize],
    ) -> EmbedResult<WorldEmbedding> {
        let mut stations = Vec::with_capacity(station_indices.len());
        let mut frames = Vec::with_capacity(station_indices.len());

        for &index in station_indices {
            frames.push(axis.frame_at(index)?);
            let station = axis.station(index).ok_or(AxisError::StationOutOfRange {
                index,
                len: axis.len(),
            })?;
            stations.push(station);
        }

        self.embed(section, &stations, &frames)
    }
}
