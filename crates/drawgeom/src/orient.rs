//! Orientation predicate for three ordered points.

use nalgebra::Point2;

/// Twice the signed area of triangle `(a, b, c)`.
/// Positive for a counterclockwise turn at `b`, negative for clockwise, zero if collinear.
#[inline]
pub fn signed_area2(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True iff `(a, b, c)` is a strict counterclockwise turn.
/// Collinear and clockwise configurations both return false.
#[inline]
pub fn is_strictly_ccw(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> bool {
    signed_area2(a, b, c) > 0.0
}
