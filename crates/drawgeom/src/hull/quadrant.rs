//! Convex hull with an extreme-point quadrant filter.
//!
//! Steps
//! 1. One pass finds four extremes: `min_x` (ties: smallest y), `min_y` (ties:
//!    largest x), `max_x` (ties: smallest y), `max_y` (ties: largest x).
//! 2. Every other point goes to at most one of four buckets (lower-left,
//!    lower-right, upper-right, upper-left), tested in that order. A point
//!    enters a bucket only if it lies in that corner of the bounding box and
//!    strictly outside the chord between the two extremes bounding the corner.
//!    Anything else is interior to the extreme quadrilateral and dropped.
//! 3. Lower buckets sort by x ascending, upper buckets by x descending; ties by y ascending.
//! 4. Extremes and buckets are appended in CCW order with the stack step of
//!    `push_hull_point`, then the ring is closed.
//!
//! The tie-break rules are a convention; the monotone chain cross-check in the
//! tests is what pins them down.

use std::cmp::Ordering;

use nalgebra::Point2;

use super::{push_hull_point, validate_points};
use crate::error::Result;
use crate::orient::is_strictly_ccw;
use crate::polygon::ConvexPolygon;

struct Extremes {
    min_x: Point2<f64>,
    min_y: Point2<f64>,
    max_x: Point2<f64>,
    max_y: Point2<f64>,
}

fn find_extremes(points: &[Point2<f64>]) -> Extremes {
    let first = points[0];
    let mut e = Extremes {
        min_x: first,
        min_y: first,
        max_x: first,
        max_y: first,
    };
    for p in &points[1..] {
        if p.x < e.min_x.x || (p.x == e.min_x.x && p.y < e.min_x.y) {
            e.min_x = *p;
        }
        if p.y < e.min_y.y || (p.y == e.min_y.y && p.x > e.min_y.x) {
            e.min_y = *p;
        }
        if p.x > e.max_x.x || (p.x == e.max_x.x && p.y < e.max_x.y) {
            e.max_x = *p;
        }
        if p.y > e.max_y.y || (p.y == e.max_y.y && p.x > e.max_y.x) {
            e.max_y = *p;
        }
    }
    e
}

#[inline]
fn by_x_then_y(a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
fn by_x_desc_then_y(a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
    match b.x.partial_cmp(&a.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Hull via extreme-point filtering; the input slice is only read.
pub fn quadrant_filter_hull(points: &[Point2<f64>]) -> Result<ConvexPolygon> {
    validate_points(points)?;
    let Extremes {
        min_x,
        min_y,
        max_x,
        max_y,
    } = find_extremes(points);

    let mut lower_left = Vec::new();
    let mut lower_right = Vec::new();
    let mut upper_right = Vec::new();
    let mut upper_left = Vec::new();
    for p in points {
        if p.x <= min_y.x && p.y <= min_x.y && is_strictly_ccw(&min_x, p, &min_y) {
            lower_left.push(*p);
        } else if p.x >= min_y.x && p.y <= max_x.y && is_strictly_ccw(&min_y, p, &max_x) {
            lower_right.push(*p);
        } else if p.x >= max_y.x && p.y >= max_x.y && is_strictly_ccw(&max_x, p, &max_y) {
            upper_right.push(*p);
        } else if p.x <= max_y.x && p.y >= min_x.y && is_strictly_ccw(&max_y, p, &min_x) {
            upper_left.push(*p);
        }
    }
    let survivors = lower_left.len() + lower_right.len() + upper_right.len() + upper_left.len();

    lower_left.sort_by(by_x_then_y);
    lower_right.sort_by(by_x_then_y);
    upper_right.sort_by(by_x_desc_then_y);
    upper_left.sort_by(by_x_desc_then_y);

    let mut hull: Vec<Point2<f64>> = Vec::with_capacity(survivors + 4);
    push_hull_point(&mut hull, min_x);
    for p in lower_left {
        push_hull_point(&mut hull, p);
    }
    push_hull_point(&mut hull, min_y);
    for p in lower_right {
        push_hull_point(&mut hull, p);
    }
    push_hull_point(&mut hull, max_x);
    for p in upper_right {
        push_hull_point(&mut hull, p);
    }
    push_hull_point(&mut hull, max_y);
    for p in upper_left {
        push_hull_point(&mut hull, p);
    }
    close_ring(&mut hull);

    tracing::debug!(
        input = points.len(),
        survivors,
        hull = hull.len(),
        "quadrant_filter_hull"
    );
    ConvexPolygon::from_hull(hull)
}

/// Drop vertices where the ring wraps from the last point back to the first
/// without a strict CCW turn.
fn close_ring(hull: &mut Vec<Point2<f64>>) {
    if hull.len() >= 2 && hull[0] == hull[hull.len() - 1] {
        hull.pop();
    }
    while hull.len() >= 3 && !is_strictly_ccw(&hull[hull.len() - 2], &hull[hull.len() - 1], &hull[0]) {
        hull.pop();
    }
    while hull.len() >= 3 && !is_strictly_ccw(&hull[hull.len() - 1], &hull[0], &hull[1]) {
        hull.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_follow_tie_breaks() {
        // Unit square with every corner an extreme candidate.
        let pts = [
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let e = find_extremes(&pts);
        assert_eq!(e.min_x, Point2::new(0.0, 0.0));
        assert_eq!(e.min_y, Point2::new(1.0, 0.0));
        assert_eq!(e.max_x, Point2::new(1.0, 0.0));
        assert_eq!(e.max_y, Point2::new(1.0, 1.0));
    }

    #[test]
    fn upper_right_vertex_inside_lower_left_box_is_kept() {
        // (4, 9.9) sits inside the lower-left corner box but belongs to the
        // upper-right chain; it must not be discarded by the first region test.
        let pts = [
            Point2::new(0.0, 10.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 1.0),
            Point2::new(2.0, 12.0),
            Point2::new(4.0, 9.9),
        ];
        let hull = quadrant_filter_hull(&pts).unwrap();
        assert_eq!(hull.size(), 5);
        assert!(hull.points().contains(&Point2::new(4.0, 9.9)));
    }
}
