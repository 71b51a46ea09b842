//! Geometry model: points, curves, and cardinal spline evaluation.
//!
//! Everything here is in the rendering surface's local pixel space. The
//! spline evaluation in [`spline`] is the only place that turns a point
//! sequence into path segments; every render path goes through it so the live
//! preview and the committed stroke can never diverge.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::SPLINE_TENSION_DIVISOR;

/// A point in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether `other` lies within `radius` of this point (inclusive).
    #[must_use]
    pub fn within(self, other: Point, radius: f64) -> bool {
        self.distance_sq(other) <= radius * radius
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Map a global (client) position into surface-local coordinates.
///
/// `origin` is the surface's on-screen top-left corner.
#[must_use]
pub fn to_local(global: Point, origin: Point) -> Point {
    global.sub(origin)
}

/// An ordered sequence of control points.
///
/// Order defines the spline parametrization; the endpoints are the first and
/// last elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether this curve has enough points to be stroked.
    #[must_use]
    pub fn is_strokable(&self) -> bool {
        self.points.len() >= 2
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Swap the point at `index` for `point`. Returns false when out of range.
    pub(crate) fn replace(&mut self, index: usize, point: Point) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = point;
        true
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// One cubic Bézier segment, starting wherever the previous one ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub cp1: Point,
    pub cp2: Point,
    pub to: Point,
}

/// An evaluated spline: a start point plus one cubic per control-point pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SplinePath {
    pub start: Point,
    pub segments: Vec<CubicSegment>,
}

impl SplinePath {
    /// End point of the final segment.
    #[must_use]
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |seg| seg.to)
    }
}

/// Evaluate the endpoint-clamped cardinal spline through `points`.
///
/// Returns `None` for fewer than two points: such a sequence has no stroke.
#[must_use]
pub fn spline(points: &[Point]) -> Option<SplinePath> {
    let (&start, _) = points.split_first()?;
    if points.len() < 2 {
        return None;
    }

    let last = points.len() - 1;
    let segments = (0..last)
        .map(|i| {
            let p1 = points[i];
            let p2 = points[i + 1];
            let p0 = if i == 0 { p1 } else { points[i - 1] };
            let p3 = points.get(i + 2).copied().unwrap_or(p2);

            CubicSegment {
                cp1: p1.add(p2.sub(p0).scale(1.0 / SPLINE_TENSION_DIVISOR)),
                cp2: p2.sub(p3.sub(p1).scale(1.0 / SPLINE_TENSION_DIVISOR)),
                to: p2,
            }
        })
        .collect();

    Some(SplinePath { start, segments })
}
