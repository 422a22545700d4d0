//! Cross-section geometry: named 2D points plus variables.

use std::collections::HashMap;

use nalgebra::Point2;

use crate::error::{SectionError, SectionResult};
use crate::units::Unit;
use crate::variable::Variable;

/// A structural cross-section: an ordered collection of named local 2D
/// points and a set of named, possibly station-dependent variables.
///
/// Point coordinates are `(Y, Z)` pairs in the section's local plane (the
/// local X axis, along the reference axis, is implicitly zero). Points are
/// kept in **insertion order**, which fixes the row order of
/// [`Self::points_array`] so downstream indices stay consistent across
/// calls.
#[derive(Debug, Clone)]
pub struct CrossSection {
    name: String,
    section_type: String,
    point_unit: Unit,
    point_names: Vec<String>,
    point_coords: Vec<Point2<f64>>,
    point_index: HashMap<String, usize>,
    variables: HashMap<String, Variable>,
}

impl CrossSection {
    /// Create an empty cross-section with points in millimeters.
    #[must_use]
    pub fn new(name: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section_type: section_type.into(),
            point_unit: Unit::Millimeter,
            point_names: Vec::new(),
            point_coords: Vec::new(),
            point_index: HashMap::new(),
            variables: HashMap::new(),
        }
    }

    /// Set the unit the point coordinates are expressed in.
    #[must_use]
    pub fn with_point_unit(mut self, unit: Unit) -> Self {
        self.point_unit = unit;
        self
    }

    /// Build a rectangular section with corner points `P1..P4`
    /// (bottom-left, bottom-right, top-right, top-left), centered on the
    /// local origin.
    #[must_use]
    pub fn rectangular(width: f64, height: f64, name: impl Into<String>) -> Self {
        let mut section = Self::new(name, "rectangle");
        let hw = width / 2.0;
        let hh = height / 2.0;
        // Construction from literals cannot collide on point ids.
        let _ = section.add_point("P1", -hw, -hh);
        let _ = section.add_point("P2", hw, -hh);
        let _ = section.add_point("P3", hw, hh);
        let _ = section.add_point("P4", -hw, hh);
        section
    }

    /// Section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section type label.
    #[must_use]
    pub fn section_type(&self) -> &str {
        &self.section_type
    }

    /// Unit the point coordinates are expressed in.
    #[must_use]
    pub fn point_unit(&self) -> Unit {
        self.point_unit
    }

    /// Number of points on the section.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_coords.len()
    }

    /// Whether the section has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_coords.is_empty()
    }

    /// Add a named point with local `(y, z)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::DuplicatePoint`] if a point with this id
    /// already exists.
    pub fn add_point(&mut self, id: impl Into<String>, y: f64, z: f64) -> SectionResult<()> {
        let id = id.into();
        if self.point_index.contains_key(&id) {
            return Err(SectionError::DuplicatePoint {
                id,
                section: self.name.clone(),
            });
        }
        self.point_index.insert(id.clone(), self.point_coords.len());
        self.point_names.push(id);
        self.point_coords.push(Point2::new(y, z));
        Ok(())
    }

    /// Look up a point by id.
    #[must_use]
    pub fn point(&self, id: &str) -> Option<Point2<f64>> {
        self.point_index.get(id).map(|&i| self.point_coords[i])
    }

    /// The points as a fixed-order array with the parallel list of ids
    /// establishing that order (insertion order).
    ///
    /// An empty section yields two empty vectors, never a
    /// shape-mismatched result.
    #[must_use]
    pub fn points_array(&self) -> (Vec<Point2<f64>>, Vec<&str>) {
        let ids = self.point_names.iter().map(String::as_str).collect();
        (self.point_coords.clone(), ids)
    }

    /// Define or replace a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, variable: Variable) {
        self.variables.insert(name.into(), variable);
    }

    /// Look up a variable definition.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Resolve a variable at a station, in the variable's own unit.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::MissingVariable`] when the variable is not
    /// defined and no default policy applies.
    pub fn variable_at(&self, name: &str, station: f64) -> SectionResult<f64> {
        self.variables
            .get(name)
            .map(|v| v.at(station))
            .ok_or_else(|| SectionError::MissingVariable {
                name: name.to_string(),
                section: self.name.clone(),
            })
    }

    /// Resolve a variable at a station, substituting an explicit scalar
    /// default when it is absent.
    ///
    /// The default is returned as given, with no unit conversion; callers
    /// substituting a non-zero default silently change geometry and must
    /// document it.
    #[must_use]
    pub fn variable_or(&self, name: &str, station: f64, default: f64) -> f64 {
        self.variables
            .get(name)
            .map_or(default, |v| v.at(station))
    }

    /// Like [`Self::variable_or`], but a present variable is converted
    /// from its tagged unit to `target` before returning.
    #[must_use]
    pub fn variable_or_in(&self, name: &str, station: f64, default: f64, target: Unit) -> f64 {
        self.variables
            .get(name)
            .map_or(default, |v| v.at_in(station, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn points_keep_insertion_order() {
        let mut section = CrossSection::new("deck", "box");
        section.add_point("B", 1.0, 2.0).expect("add");
        section.add_point("A", 3.0, 4.0).expect("add");

        let (points, ids) = section.points_array();
        assert_eq!(ids, vec!["B", "A"]);
        assert_relative_eq!(points[0].x, 1.0);
        assert_relative_eq!(points[1].y, 4.0);

        // Order is stable across calls.
        let (_, ids_again) = section.points_array();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn duplicate_point_rejected() {
        let mut section = CrossSection::new("deck", "box");
        section.add_point("P1", 0.0, 0.0).expect("add");
        assert!(matches!(
            section.add_point("P1", 1.0, 1.0),
            Err(SectionError::DuplicatePoint { .. })
        ));
        assert_eq!(section.point_count(), 1);
    }

    #[test]
    fn empty_section_yields_empty_arrays() {
        let section = CrossSection::new("empty", "none");
        let (points, ids) = section.points_array();
        assert!(points.is_empty());
        assert!(ids.is_empty());
    }

    #[test]
    fn rectangular_corners() {
        let section = CrossSection::rectangular(10.0, 8.0, "rect");
        assert_eq!(section.point_count(), 4);
        let (points, ids) = section.points_array();
        assert_eq!(ids, vec!["P1", "P2", "P3", "P4"]);
        assert_relative_eq!(points[0].x, -5.0);
        assert_relative_eq!(points[0].y, -4.0);
        assert_relative_eq!(points[2].x, 5.0);
        assert_relative_eq!(points[2].y, 4.0);
    }

    #[test]
    fn missing_variable_is_an_error() {
        let section = CrossSection::new("deck", "box");
        assert!(matches!(
            section.variable_at("H", 0.0),
            Err(SectionError::MissingVariable { .. })
        ));
    }

    #[test]
    fn variable_default_policy() {
        let mut section = CrossSection::new("deck", "box");
        assert_relative_eq!(section.variable_or("scale", 0.0, 1.0), 1.0);
        assert_relative_eq!(section.variable_or("offset_y", 0.0, 0.0), 0.0);

        section.set_variable("scale", Variable::constant(2.0, Unit::Millimeter));
        assert_relative_eq!(section.variable_or("scale", 0.0, 1.0), 2.0);
    }

    #[test]
    fn variable_resolved_in_target_unit() {
        let mut section = CrossSection::new("deck", "box");
        section.set_variable("H", Variable::constant(4000.0, Unit::Millimeter));
        assert_relative_eq!(
            section.variable_or_in("H", 0.0, 0.0, Unit::Meter),
            4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn station_dependent_variable() {
        let mut section = CrossSection::new("deck", "box");
        section.set_variable(
            "H",
            Variable::per_station(|s| 4000.0 + s / 10.0, Unit::Millimeter),
        );
        assert_relative_eq!(section.variable_at("H", 0.0).expect("H"), 4000.0);
        assert_relative_eq!(section.variable_at("H", 500.0).expect("H"), 4050.0);
    }
}
