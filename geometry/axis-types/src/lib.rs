//! Reference-axis geometry for structural cross-section embedding.
//!
//! This crate models a 3D reference axis (an ordered station grid with
//! index-aligned world coordinates) and derives local orthonormal frames
//! along it:
//!
//! - [`Frame`] - Tangent/normal/binormal basis at a station
//! - [`compute`] - Pointwise finite-difference frame construction
//! - [`Axis`] - The axis itself, with a bounded per-station frame cache,
//!   parallel transport, and raw point embedding
//! - [`FrameCache`] - The explicit LRU memo behind [`Axis::frame_at`]
//!
//! # Pointwise frames vs. parallel transport
//!
//! [`Axis::frame_at`] builds each frame independently from finite
//! differences and a reference up vector. That is cheap and cacheable,
//! but on strongly curved or near-vertical paths independent frames can
//! jump between up-vector branches. [`Axis::parallel_transport`] instead
//! propagates one seed frame station by station with the minimal rotation
//! per segment, trading a sequential scan for continuity.
//!
//! # Example
//!
//! ```
//! use axis_types::Axis;
//! use nalgebra::{Point2, Point3};
//!
//! let stations = vec![0.0, 500.0, 1000.0];
//! let coordinates: Vec<_> = stations
//!     .iter()
//!     .map(|&s| Point3::new(s, 0.0, 0.0))
//!     .collect();
//! let axis = Axis::new(stations, coordinates)?;
//!
//! // Frames are orthonormal and cached per station index.
//! let frame = axis.frame_at(1)?;
//! assert!(frame.is_orthonormal(1e-6));
//!
//! // Embed local section points at every station.
//! let square = [Point2::new(-5.0, -4.0), Point2::new(5.0, 4.0)];
//! let world = axis.embed_points(&square, &[0, 1, 2])?;
//! assert_eq!(world.len(), 3);
//! assert_eq!(world[0].len(), 2);
//! # Ok::<(), axis_types::AxisError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization for [`Frame`]

#![doc(html_root_url = "https://docs.rs/axis-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

mod axis;
mod cache;
pub mod compute;
mod error;
mod frame;

pub use axis::{validate_monotonic, Axis};
pub use cache::{FrameCache, DEFAULT_CACHE_CAPACITY};
pub use error::{AxisError, AxisResult};
pub use frame::Frame;
