#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::{Curve, Point};

/// Index of the first committed curve with any control point within `radius`
/// of `pt`.
///
/// Curves are scanned in store order, so an earlier curve wins over a later
/// one even though the later one is painted on top.
#[must_use]
pub fn hit_curve(pt: Point, curves: &[Curve], radius: f64) -> Option<usize> {
    curves
        .iter()
        .position(|curve| curve.points().iter().any(|p| p.within(pt, radius)))
}

/// Index of the first control point of `curve` within `radius` of `pt`.
#[must_use]
pub fn hit_point(pt: Point, curve: &Curve, radius: f64) -> Option<usize> {
    curve.points().iter().position(|p| p.within(pt, radius))
}
