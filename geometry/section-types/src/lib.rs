//! Cross-section types for structural geometry processing.
//!
//! This crate provides the section-side data model for embedding structural
//! cross-sections along a reference axis:
//!
//! - [`CrossSection`] - Ordered named 2D points plus named variables
//! - [`Variable`] / [`VariableValue`] - Constant or station-dependent scalars
//!   with explicit unit tags
//! - [`Unit`] - Length units (`"[mm]"` / `"[m]"`) with scalar and slice
//!   conversion
//!
//! # Example
//!
//! ```
//! use section_types::{CrossSection, Unit, Variable};
//!
//! let mut section = CrossSection::new("deck", "box");
//! section.add_point("P1", 0.0, 0.0)?;
//! section.add_point("P2", 1500.0, 0.0)?;
//! section.set_variable("H", Variable::constant(4000.0, Unit::Millimeter));
//!
//! let (points, ids) = section.points_array();
//! assert_eq!(ids, vec!["P1", "P2"]);
//! assert_eq!(points.len(), 2);
//!
//! // Variables resolve per station, in a requested target unit.
//! let h = section.variable_or_in("H", 0.0, 0.0, Unit::Meter);
//! assert!((h - 4.0).abs() < 1e-12);
//! # Ok::<(), section_types::SectionError>(())
//! ```
//!
//! # Units
//!
//! Every variable carries an explicit unit tag, and section points carry
//! one for the whole collection (millimeters unless overridden). Units are
//! never inferred from magnitude; conversion happens only where a caller
//! names a target unit.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization for the plain-data types

#![doc(html_root_url = "https://docs.rs/section-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

mod error;
mod section;
mod units;
mod variable;

pub use error::{SectionError, SectionResult};
pub use section::CrossSection;
pub use units::{convert_tagged, Unit};
pub use variable::{Variable, VariableValue};
