//! Length units and conversion.
//!
//! All geometry exchanged at the loader boundary carries an explicit unit
//! tag (`"[mm]"` or `"[m]"`); units are never inferred from magnitude.

use crate::error::{SectionError, SectionResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Millimeters, tag `"[mm]"`.
    Millimeter,
    /// Meters, tag `"[m]"`.
    Meter,
}

impl Unit {
    /// Parse a unit from its tag form.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::UnknownUnit`] for any tag other than
    /// `"[mm]"` or `"[m]"`.
    pub fn parse(tag: &str) -> SectionResult<Self> {
        match tag {
            "[mm]" => Ok(Self::Millimeter),
            "[m]" => Ok(Self::Meter),
            other => Err(SectionError::UnknownUnit(other.to_string())),
        }
    }

    /// The tag form of this unit.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Millimeter => "[mm]",
            Self::Meter => "[m]",
        }
    }

    /// Multiplicative factor taking a value in `self` to a value in `to`.
    fn factor_to(self, to: Self) -> f64 {
        match (self, to) {
            (Self::Millimeter, Self::Meter) => 1e-3,
            (Self::Meter, Self::Millimeter) => 1e3,
            _ => 1.0,
        }
    }

    /// Convert a scalar from this unit to `to`.
    ///
    /// The identity pair returns the input value unchanged, with no
    /// arithmetic applied.
    #[must_use]
    pub fn convert(self, value: f64, to: Self) -> f64 {
        if self == to {
            value
        } else {
            value * self.factor_to(to)
        }
    }

    /// Convert a slice of values element-wise from this unit to `to`.
    ///
    /// Operates identically to [`Self::convert`] on every element, so
    /// callers never special-case scalar versus array inputs.
    #[must_use]
    pub fn convert_slice(self, values: &[f64], to: Self) -> Vec<f64> {
        if self == to {
            return values.to_vec();
        }
        let factor = self.factor_to(to);
        values.iter().map(|v| v * factor).collect()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Convert a scalar between string-tagged units.
///
/// Boundary convenience for loaders that hand over raw `(value, tag)`
/// pairs.
///
/// # Errors
///
/// Returns [`SectionError::UnsupportedConversion`] when either tag is not
/// a supported unit.
pub fn convert_tagged(value: f64, from_tag: &str, to_tag: &str) -> SectionResult<f64> {
    match (Unit::parse(from_tag), Unit::parse(to_tag)) {
        (Ok(from), Ok(to)) => Ok(from.convert(value, to)),
        _ => Err(SectionError::UnsupportedConversion {
            from: from_tag.to_string(),
            to: to_tag.to_string(),
        }),
    }
}
