//! End-to-end embedding scenarios across axis, section, and embedder.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use axis_types::Axis;
use nalgebra::Point3;
use section_embed::{embed_planar, embed_planar_at, EmbedError, FrameEmbedder};
use section_types::{CrossSection, Unit, Variable};

fn straight_axis_mm(stations: &[f64]) -> Axis {
    let coordinates = stations.iter().map(|&s| Point3::new(s, 0.0, 0.0)).collect();
    Axis::new(stations.to_vec(), coordinates).expect("axis")
}

/// Straight 1 m axis, unit-square corner section, no variables: world X
/// equals the station, world Y/Z equal the local coordinates unchanged.
#[test]
fn straight_axis_identity_embedding() {
    let stations = [0.0, 500.0, 1000.0];
    let axis = straight_axis_mm(&stations);
    let section = CrossSection::rectangular(10.0, 8.0, "rect");
    let local = [(-5.0, -4.0), (5.0, -4.0), (5.0, 4.0), (-5.0, 4.0)];

    let embedder = FrameEmbedder::basic(Unit::Millimeter);
    let world = embedder.embed_axis(&section, &axis, &[0, 1, 2]).expect("embed");

    assert_eq!(world.shape(), (3, 4, 3));
    for (i, &station) in stations.iter().enumerate() {
        for (j, &(y, z)) in local.iter().enumerate() {
            let p = world.get(i, j).expect("point");
            assert_relative_eq!(p.x, station, epsilon = 1e-9);
            assert_relative_eq!(p.y, y, epsilon = 1e-9);
            assert_relative_eq!(p.z, z, epsilon = 1e-9);
        }
    }
}

/// Height variable `H = 4000 [mm]`, two points, target `[mm]`: Z becomes
/// 4000 everywhere, Y unchanged.
#[test]
fn height_scenario_millimeters() {
    let mut section = CrossSection::new("deck", "box");
    section.add_point("P1", 0.0, 0.0).unwrap();
    section.add_point("P2", 1500.0, 0.0).unwrap();
    section.set_variable("H", Variable::constant(4000.0, Unit::Millimeter));

    let world = embed_planar_at(&section, 0.0, Unit::Millimeter).expect("embed");
    assert_eq!(world.len(), 2);
    assert_relative_eq!(world[0].x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(world[1].x, 1500.0, epsilon = 1e-9);
    assert_relative_eq!(world[0].y, 4000.0, epsilon = 1e-9);
    assert_relative_eq!(world[1].y, 4000.0, epsilon = 1e-9);
    assert!(world.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

/// Same scenario with everything in meters: `H = 4.0 [m]`, points in
/// meters, target `[m]`.
#[test]
fn height_scenario_meters() {
    let mut section = CrossSection::new("deck", "box").with_point_unit(Unit::Meter);
    section.add_point("P1", 0.0, 0.0).unwrap();
    section.add_point("P2", 1.5, 0.0).unwrap();
    section.set_variable("H", Variable::constant(4.0, Unit::Meter));

    let world = embed_planar_at(&section, 0.0, Unit::Meter).expect("embed");
    assert_relative_eq!(world[0].y, 4.0, epsilon = 1e-12);
    assert_relative_eq!(world[1].y, 4.0, epsilon = 1e-12);
}

/// Basic-mode embedding with only a height variable maps local Z to
/// `Z + H` and leaves Y untouched, for any finite H.
#[test]
fn basic_mode_height_translation() {
    for h in [-250.0, 0.0, 4000.0, 1e7] {
        let mut section = CrossSection::rectangular(10.0, 8.0, "rect");
        section.set_variable("H", Variable::constant(h, Unit::Millimeter));

        let stations = [0.0, 500.0, 1000.0];
        let axis = straight_axis_mm(&stations);
        let embedder = FrameEmbedder::basic(Unit::Millimeter);
        let world = embedder.embed_axis(&section, &axis, &[0, 1, 2]).expect("embed");

        let (local, _) = section.points_array();
        for i in 0..3 {
            for (j, p2) in local.iter().enumerate() {
                let p = world.get(i, j).expect("point");
                assert_relative_eq!(p.y, p2.x, epsilon = 1e-9);
                assert_relative_eq!(p.z, p2.y + h, epsilon = 1e-9);
            }
        }
    }
}

/// Symmetric mode differs from basic mode only in the sign of the
/// binormal (Z) component, and only at odd station indices.
#[test]
fn symmetric_mode_flips_only_odd_stations() {
    let section = CrossSection::rectangular(10.0, 8.0, "rect");
    let stations = [0.0, 250.0, 500.0, 750.0, 1000.0];
    let axis = straight_axis_mm(&stations);
    let indices = [0, 1, 2, 3, 4];

    let basic = FrameEmbedder::basic(Unit::Millimeter)
        .embed_axis(&section, &axis, &indices)
        .expect("basic");
    let symmetric = FrameEmbedder::symmetric(Unit::Millimeter)
        .embed_axis(&section, &axis, &indices)
        .expect("symmetric");

    assert_eq!(basic.shape(), symmetric.shape());
    for i in 0..indices.len() {
        for j in 0..section.point_count() {
            let b = basic.get(i, j).expect("basic point");
            let s = symmetric.get(i, j).expect("symmetric point");
            assert_relative_eq!(s.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(s.y, b.y, epsilon = 1e-9);
            if i % 2 == 0 {
                assert_relative_eq!(s.z, b.z, epsilon = 1e-9);
            } else {
                assert_relative_eq!(s.z, -b.z, epsilon = 1e-9);
            }
        }
    }
}

/// The frame-based basic mode and the planar mode agree on their
/// overlapping case: straight axis, height variable only.
#[test]
fn basic_and_planar_agree_on_overlap() {
    let mut section = CrossSection::rectangular(10.0, 8.0, "rect");
    section.set_variable("H", Variable::constant(4000.0, Unit::Millimeter));

    let stations = [0.0, 500.0, 1000.0];
    let axis = straight_axis_mm(&stations);

    let framed = FrameEmbedder::basic(Unit::Millimeter)
        .embed_axis(&section, &axis, &[0, 1, 2])
        .expect("framed");
    let planar = embed_planar(&section, &stations, Unit::Millimeter).expect("planar");

    assert_eq!(framed.shape(), planar.shape());
    for (a, b) in framed.iter().zip(planar.iter()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }
}

/// Transport-based frames embed identically to pointwise frames on a
/// straight axis (the transport seed is the pointwise frame).
#[test]
fn transported_frames_match_pointwise_on_straight_axis() {
    let stations = [0.0, 500.0, 1000.0];
    let axis = straight_axis_mm(&stations);
    let section = CrossSection::rectangular(10.0, 8.0, "rect");

    let frames = axis.parallel_transport(0, 2).expect("transport");
    let embedder = FrameEmbedder::basic(Unit::Millimeter);

    let via_transport = embedder
        .embed(&section, &stations, &frames)
        .expect("embed transported");
    let via_axis = embedder
        .embed_axis(&section, &axis, &[0, 1, 2])
        .expect("embed pointwise");

    for (a, b) in via_transport.iter().zip(via_axis.iter()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }
}

/// Zero-point sections keep the station extent: shape `(S, 0, 3)`.
#[test]
fn zero_point_section_shape() {
    let stations = [0.0, 500.0, 1000.0];
    let axis = straight_axis_mm(&stations);
    let section = CrossSection::new("empty", "none");

    let world = FrameEmbedder::basic(Unit::Millimeter)
        .embed_axis(&section, &axis, &[0, 1, 2])
        .expect("embed");
    assert_eq!(world.shape(), (3, 0, 3));
}

/// Non-monotonic stations are rejected before any embedding arithmetic.
#[test]
fn non_monotonic_stations_flagged() {
    let section = CrossSection::rectangular(10.0, 8.0, "rect");
    let result = embed_planar(&section, &[0.0, 500.0, 200.0], Unit::Millimeter);
    assert!(matches!(result, Err(EmbedError::Axis(_))));

    let coordinates = vec![Point3::origin(); 3];
    assert!(Axis::new(vec![0.0, 500.0, 200.0], coordinates).is_err());
}
