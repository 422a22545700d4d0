//! Variable-driven planar embedding.
//!
//! The second embedding strategy: no frames, the world X coordinate is the
//! station itself and the section plane stays axis-aligned. Geometry is
//! driven entirely by the section variables (`offset_y`, `offset_z`, `H`).
//! For a straight `+X` axis this agrees with the frame-based basic mode.

use axis_types::validate_monotonic;
use nalgebra::{Point2, Point3};
use section_types::{CrossSection, Unit};
use tracing::info;

use crate::error::{EmbedError, EmbedResult};
use crate::result::WorldEmbedding;

/// Embed the section at a sequence of stations, planar strategy.
///
/// Stations are expressed in the target unit and must be non-decreasing;
/// per station `s` and local point `(y, z)`:
///
/// ```text
/// world = (s, y + offset_y(s), z + offset_z(s) + H(s))
/// ```
///
/// with points and the length-valued variables converted to the target
/// unit first, and the same scalar default policy as the frame strategy
/// (0.0 for absent offsets and height).
///
/// # Errors
///
/// - [`EmbedError::Axis`] wrapping the monotonicity check failure
/// - [`EmbedError::NonFiniteResult`] on any NaN/infinite output
pub fn embed_planar(
    section: &CrossSection,
    stations: &[f64],
    target_unit: Unit,
) -> EmbedResult<WorldEmbedding> {
    validate_monotonic(stations)?;

    let (local_points, _ids) = section.points_array();
    info!(
        section = section.name(),
        stations = stations.len(),
        points = local_points.len(),
        unit = target_unit.tag(),
        "embedding cross-section (planar)"
    );

    let rows = stations
        .iter()
        .map(|&station| {
            planar_row(section, &local_points, station, target_unit)
                .into_iter()
                .map(|p| Point3::new(station, p.x, p.y))
                .collect()
        })
        .collect();

    let embedding = WorldEmbedding::from_rows(rows)?;
    if let Some((station, point)) = embedding.first_non_finite() {
        return Err(EmbedError::NonFiniteResult { station, point });
    }
    Ok(embedding)
}

/// Embed the section at a single station, returning the world `(Y, Z)`
/// pairs in section point order.
///
/// # Errors
///
/// [`EmbedError::NonFiniteResult`] on any NaN/infinite output.
pub fn embed_planar_at(
    section: &CrossSection,
    station: f64,
    target_unit: Unit,
) -> EmbedResult<Vec<Point2<f64>>> {
    let (local_points, _ids) = section.points_array();
    let world = planar_row(section, &local_points, station, target_unit);

    if let Some(point) = world
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(EmbedError::NonFiniteResult { station: 0, point });
    }
    Ok(world)
}

fn planar_row(
    section: &CrossSection,
    local_points: &[Point2<f64>],
    station: f64,
    target_unit: Unit,
) -> Vec<Point2<f64>> {
    let point_unit = section.point_unit();
    let offset_y = section.variable_or_in("offset_y", station, 0.0, target_unit);
    let offset_z = section.variable_or_in("offset_z", station, 0.0, target_unit);
    let height = section.variable_or_in("H", station, 0.0, target_unit);

    local_points
        .iter()
        .map(|local| {
            let y = point_unit.convert(local.x, target_unit);
            let z = point_unit.convert(local.y, target_unit);
            Point2::new(y + offset_y, z + offset_z + height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use section_types::Variable;

    fn section_with_height_mm() -> CrossSection {
        let mut section = CrossSection::new("deck", "box");
        section.add_point("P1", 0.0, 0.0).expect("add");
        section.add_point("P2", 1500.0, 0.0).expect("add");
        section.set_variable("H", Variable::constant(4000.0, Unit::Millimeter));
        section
    }

    #[test]
    fn height_in_millimeters() {
        let section = section_with_height_mm();
        let world = embed_planar_at(&section, 0.0, Unit::Millimeter).expect("embed");

        assert_eq!(world.len(), 2);
        assert_relative_eq!(world[0].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(world[0].y, 4000.0, epsilon = 1e-10);
        assert_relative_eq!(world[1].x, 1500.0, epsilon = 1e-10);
        assert_relative_eq!(world[1].y, 4000.0, epsilon = 1e-10);
    }

    #[test]
    fn height_in_meters() {
        let mut section = CrossSection::new("deck", "box").with_point_unit(Unit::Meter);
        section.add_point("P1", 0.0, 0.0).expect("add");
        section.add_point("P2", 1.5, 0.0).expect("add");
        section.set_variable("H", Variable::constant(4.0, Unit::Meter));

        let world = embed_planar_at(&section, 0.0, Unit::Meter).expect("embed");
        assert_relative_eq!(world[0].y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(world[1].y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(world[1].x, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn mixed_units_convert_before_combination() {
        // Points in mm, H tagged [mm], result requested in meters: both
        // are converted before the addition.
        let section = section_with_height_mm();
        let world = embed_planar_at(&section, 0.0, Unit::Meter).expect("embed");

        assert_relative_eq!(world[0].y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(world[1].x, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn multi_station_shape_and_x() {
        let section = section_with_height_mm();
        let stations = [0.0, 500.0, 1000.0];
        let embedding = embed_planar(&section, &stations, Unit::Millimeter).expect("embed");

        assert_eq!(embedding.shape(), (3, 2, 3));
        for (i, &s) in stations.iter().enumerate() {
            let p = embedding.get(i, 0).expect("point");
            assert_relative_eq!(p.x, s, epsilon = 1e-10);
            assert_relative_eq!(p.z, 4000.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn non_monotonic_stations_rejected() {
        let section = section_with_height_mm();
        let result = embed_planar(&section, &[0.0, 500.0, 200.0], Unit::Millimeter);
        assert!(matches!(
            result,
            Err(EmbedError::Axis(
                axis_types::AxisError::NonMonotonicStations { index: 2 }
            ))
        ));
    }

    #[test]
    fn non_finite_offset_fails() {
        let mut section = section_with_height_mm();
        section.set_variable(
            "offset_y",
            Variable::constant(f64::INFINITY, Unit::Millimeter),
        );
        assert!(matches!(
            embed_planar_at(&section, 0.0, Unit::Millimeter),
            Err(EmbedError::NonFiniteResult { .. })
        ));
    }
}
