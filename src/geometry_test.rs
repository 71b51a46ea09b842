#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

// =============================================================
// Point
// =============================================================

#[test]
fn distance_sq_is_squared() {
    assert_eq!(pt(0.0, 0.0).distance_sq(pt(3.0, 4.0)), 25.0);
}

#[test]
fn within_is_inclusive_at_radius() {
    assert!(pt(0.0, 0.0).within(pt(8.0, 0.0), 8.0));
    assert!(!pt(0.0, 0.0).within(pt(8.01, 0.0), 8.0));
}

#[test]
fn is_finite_rejects_nan_and_infinity() {
    assert!(pt(1.0, 2.0).is_finite());
    assert!(!pt(f64::NAN, 0.0).is_finite());
    assert!(!pt(0.0, f64::INFINITY).is_finite());
}

#[test]
fn to_local_subtracts_origin() {
    let local = to_local(pt(130.0, 75.0), pt(100.0, 50.0));
    assert_eq!(local, pt(30.0, 25.0));
}

#[test]
fn point_serializes_as_xy_object() {
    let json = serde_json::to_value(pt(1.5, -2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": -2.0 }));
}

// =============================================================
// Curve
// =============================================================

#[test]
fn curve_new_is_empty() {
    let curve = Curve::new();
    assert!(curve.is_empty());
    assert_eq!(curve.len(), 0);
    assert_eq!(curve.last(), None);
    assert!(!curve.is_strokable());
}

#[test]
fn curve_push_preserves_order() {
    let mut curve = Curve::new();
    curve.push(pt(1.0, 1.0));
    curve.push(pt(2.0, 2.0));
    assert_eq!(curve.points(), &[pt(1.0, 1.0), pt(2.0, 2.0)]);
    assert_eq!(curve.last(), Some(pt(2.0, 2.0)));
    assert!(curve.is_strokable());
}

#[test]
fn curve_replace_in_range() {
    let mut curve = Curve::from_points(vec![pt(0.0, 0.0), pt(1.0, 1.0)]);
    assert!(curve.replace(1, pt(5.0, 5.0)));
    assert_eq!(curve.get(1), Some(pt(5.0, 5.0)));
    assert_eq!(curve.get(0), Some(pt(0.0, 0.0)));
}

#[test]
fn curve_replace_out_of_range_is_refused() {
    let mut curve = Curve::from_points(vec![pt(0.0, 0.0)]);
    assert!(!curve.replace(3, pt(5.0, 5.0)));
    assert_eq!(curve.points(), &[pt(0.0, 0.0)]);
}

#[test]
fn curve_serializes_as_plain_array() {
    let curve = Curve::from_points(vec![pt(10.0, 10.0), pt(50.0, 10.0)]);
    let json = serde_json::to_string(&curve).unwrap();
    assert_eq!(json, r#"[{"x":10.0,"y":10.0},{"x":50.0,"y":10.0}]"#);
}

// =============================================================
// Spline
// =============================================================

#[test]
fn spline_needs_two_points() {
    assert_eq!(spline(&[]), None);
    assert_eq!(spline(&[pt(1.0, 1.0)]), None);
}

#[test]
fn spline_emits_one_segment_per_pair() {
    let points = [pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 5.0), pt(30.0, 0.0)];
    let path = spline(&points).unwrap();
    assert_eq!(path.segments.len(), 3);
}

#[test]
fn spline_starts_and_ends_on_endpoints() {
    let points = [pt(3.0, 7.0), pt(40.0, -2.0), pt(12.0, 90.0), pt(-5.0, 33.0), pt(60.0, 60.0)];
    let path = spline(&points).unwrap();
    assert_eq!(path.start, points[0]);
    assert_eq!(path.end(), points[4]);
}

#[test]
fn spline_segments_pass_through_every_point() {
    let points = [pt(0.0, 0.0), pt(10.0, 20.0), pt(30.0, 10.0)];
    let path = spline(&points).unwrap();
    assert_eq!(path.segments[0].to, points[1]);
    assert_eq!(path.segments[1].to, points[2]);
}

#[test]
fn spline_two_points_clamps_both_neighbours() {
    let path = spline(&[pt(0.0, 0.0), pt(60.0, 0.0)]).unwrap();
    let seg = path.segments[0];
    assert!(approx(seg.cp1, pt(10.0, 0.0)));
    assert!(approx(seg.cp2, pt(50.0, 0.0)));
    assert_eq!(seg.to, pt(60.0, 0.0));
}

#[test]
fn spline_control_points_use_one_sixth_tension() {
    let path = spline(&[pt(0.0, 0.0), pt(60.0, 0.0), pt(60.0, 60.0)]).unwrap();

    let first = path.segments[0];
    assert!(approx(first.cp1, pt(10.0, 0.0)));
    assert!(approx(first.cp2, pt(50.0, -10.0)));

    let second = path.segments[1];
    assert!(approx(second.cp1, pt(70.0, 10.0)));
    assert!(approx(second.cp2, pt(60.0, 50.0)));
}

#[test]
fn spline_collinear_points_stay_on_the_line() {
    let path = spline(&[pt(0.0, 5.0), pt(10.0, 5.0), pt(20.0, 5.0), pt(30.0, 5.0)]).unwrap();
    for seg in &path.segments {
        assert!((seg.cp1.y - 5.0).abs() < 1e-9);
        assert!((seg.cp2.y - 5.0).abs() < 1e-9);
    }
}

#[test]
fn spline_path_end_without_segments_is_start() {
    let path = SplinePath { start: pt(4.0, 4.0), segments: Vec::new() };
    assert_eq!(path.end(), pt(4.0, 4.0));
}
