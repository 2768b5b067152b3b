use approx::assert_relative_eq;
use price_chart::core::{PathDescription, PathVertex, ScaledPoint, area_path, line_path};
use price_chart::transition::{extend_vertices, interpolate};

fn line(points: &[(f64, f64)]) -> PathDescription {
    line_path(
        &points
            .iter()
            .map(|&(x, y)| ScaledPoint::new(x, y))
            .collect::<Vec<_>>(),
    )
}

#[test]
fn interpolation_hits_both_endpoints() {
    let from = line(&[(0.0, 100.0), (50.0, 100.0), (100.0, 100.0)]);
    let to = line(&[(0.0, 40.0), (50.0, 20.0), (100.0, 60.0)]);

    assert_eq!(interpolate(&from, &to, 0.0), from);
    assert_eq!(interpolate(&from, &to, 1.0), to);
}

#[test]
fn interpolation_is_linear_per_vertex() {
    let from = line(&[(0.0, 100.0), (100.0, 100.0)]);
    let to = line(&[(0.0, 0.0), (100.0, 50.0)]);

    let halfway = interpolate(&from, &to, 0.5);
    assert_relative_eq!(halfway.vertices()[0].y, 50.0);
    assert_relative_eq!(halfway.vertices()[1].y, 75.0);
}

#[test]
fn progress_outside_unit_interval_is_clamped() {
    let from = line(&[(0.0, 10.0), (10.0, 10.0)]);
    let to = line(&[(0.0, 20.0), (10.0, 30.0)]);

    assert_eq!(interpolate(&from, &to, -3.0), from);
    assert_eq!(interpolate(&from, &to, 7.0), to);
    assert_eq!(interpolate(&from, &to, f64::NAN), from);
}

#[test]
fn empty_side_returns_target() {
    let to = line(&[(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(interpolate(&PathDescription::empty(), &to, 0.3), to);
    assert!(interpolate(&to, &PathDescription::empty(), 0.3).is_empty());
}

#[test]
fn mismatched_lengths_are_aligned() {
    let from = line(&[(0.0, 0.0), (100.0, 0.0)]);
    let to = line(&[(0.0, 10.0), (25.0, 10.0), (50.0, 10.0), (75.0, 10.0), (100.0, 10.0)]);

    let start = interpolate(&from, &to, 0.0);
    assert_eq!(start.len(), 5);
    let xs: Vec<f64> = start.vertices().iter().map(|vertex| vertex.x).collect();
    assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

    let shrink = interpolate(&to, &from, 0.5);
    assert_eq!(shrink.len(), 5);
    assert_eq!(interpolate(&to, &from, 1.0), from);
}

#[test]
fn extension_keeps_original_vertices_in_order() {
    let vertices = [
        PathVertex::new(0.0, 0.0),
        PathVertex::new(10.0, 10.0),
        PathVertex::new(20.0, 0.0),
    ];
    let extended = extend_vertices(&vertices, 6);

    assert_eq!(extended.len(), 6);
    assert_eq!(extended.first(), Some(&vertices[0]));
    assert_eq!(extended.last(), Some(&vertices[2]));
    assert!(extended.contains(&vertices[1]));
    assert!(extended.windows(2).all(|pair| pair[0].x <= pair[1].x));
}

#[test]
fn area_growth_morphs_closed_outline() {
    let small = area_path(&[ScaledPoint::new(0.0, 50.0), ScaledPoint::new(100.0, 50.0)], 100.0);
    let large = area_path(
        &[
            ScaledPoint::new(0.0, 20.0),
            ScaledPoint::new(50.0, 40.0),
            ScaledPoint::new(100.0, 20.0),
        ],
        100.0,
    );

    let mid = interpolate(&small, &large, 0.5);
    assert!(mid.is_closed());
    assert_eq!(mid.len(), large.len());
    assert!(mid.is_finite());
}
