//! Embedding of 2D cross-sections into 3D world coordinates.
//!
//! This crate combines an axis' station positions and local frames with a
//! cross-section's points and variables into the `(stations, points, 3)`
//! world-coordinate array consumed by plotting and export collaborators:
//!
//! - [`FrameEmbedder`] - Frame-based strategy with [`EmbedMode::Basic`]
//!   and [`EmbedMode::Symmetric`] (mirrored orientation on alternating
//!   stations)
//! - [`embed_planar`] / [`embed_planar_at`] - Variable-driven planar
//!   strategy (`H`/offset arithmetic, world X = station)
//! - [`WorldEmbedding`] - The shape-validated result type
//!
//! The two strategies produce numerically identical results for their
//! overlapping case: a straight axis and a section with only a height
//! variable.
//!
//! # Shape contract
//!
//! Every per-station parameter, supplied or defaulted, is a true scalar;
//! the result is validated to be exactly `(stations, points, 3)` and any
//! mismatch is rejected rather than reshaped. A non-finite world
//! coordinate fails the whole call; partial results are worse than a
//! hard failure for downstream structural computations.
//!
//! # Example
//!
//! ```
//! use axis_types::Axis;
//! use nalgebra::Point3;
//! use section_embed::FrameEmbedder;
//! use section_types::{CrossSection, Unit, Variable};
//!
//! let stations = vec![0.0, 500.0, 1000.0];
//! let coordinates: Vec<_> = stations
//!     .iter()
//!     .map(|&s| Point3::new(s, 0.0, 0.0))
//!     .collect();
//! let axis = Axis::new(stations, coordinates)?;
//!
//! let mut section = CrossSection::rectangular(10.0, 8.0, "deck");
//! section.set_variable("H", Variable::constant(4000.0, Unit::Millimeter));
//!
//! let embedder = FrameEmbedder::basic(Unit::Millimeter);
//! let world = embedder.embed_axis(&section, &axis, &[0, 1, 2])?;
//! assert_eq!(world.shape(), (3, 4, 3));
//! # Ok::<(), section_embed::EmbedError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization for [`WorldEmbedding`]

#![doc(html_root_url = "https://docs.rs/section-embed/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

mod error;
mod frame_embed;
mod planar;
mod result;

pub use error::{EmbedError, EmbedResult};
pub use frame_embed::{EmbedMode, FrameEmbedder};
pub use planar::{embed_planar, embed_planar_at};
pub use result::WorldEmbedding;
