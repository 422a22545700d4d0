//! Station-dependent section variables.
//!
//! Variables drive per-station geometry (heights, offsets, scale factors).
//! A variable is either a constant or a function of the station position,
//! represented as one tagged variant resolved through one accessor rather
//! than by sniffing runtime container shapes.

use std::fmt;
use std::sync::Arc;

use crate::units::Unit;

/// The value of a section variable.
#[derive(Clone)]
pub enum VariableValue {
    /// A constant scalar, the same at every station.
    Constant(f64),
    /// A scalar computed from the station position.
    PerStation(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl fmt::Debug for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::PerStation(_) => f.write_str("PerStation(..)"),
        }
    }
}

/// A named scalar parameter with an explicit unit tag.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Constant or station-dependent value.
    pub value: VariableValue,
    /// Unit the value is expressed in.
    pub unit: Unit,
}

impl Variable {
    /// Create a constant variable.
    #[must_use]
    pub fn constant(value: f64, unit: Unit) -> Self {
        Self {
            value: VariableValue::Constant(value),
            unit,
        }
    }

    /// Create a station-dependent variable.
    #[must_use]
    pub fn per_station<F>(f: F, unit: Unit) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            value: VariableValue::PerStation(Arc::new(f)),
            unit,
        }
    }

    /// Resolve the value at a station, in the variable's own unit.
    #[must_use]
    pub fn at(&self, station: f64) -> f64 {
        match &self.value {
            VariableValue::Constant(v) => *v,
            VariableValue::PerStation(f) => f(station),
        }
    }

    /// Resolve the value at a station, converted to `target`.
    #[must_use]
    pub fn at_in(&self, station: f64, target: Unit) -> f64 {
        self.unit.convert(self.at(station), target)
    }
}
