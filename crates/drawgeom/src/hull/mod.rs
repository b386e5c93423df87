//! 2D convex hulls.
//!
//! Purpose
//! - Turn a point set (or a set of shapes) into a `ConvexPolygon`.
//!
//! Algorithms
//! - `quadrant`: extreme-point pre-filter, then four short sorted scans.
//!   Expected near-linear on typical clouds; this is the default.
//! - `monotone`: Andrew's monotone chain, O(n log n), simple to audit. Used as
//!   the correctness cross-check for `quadrant`.
//!
//! Conventions
//! - Output is counterclockwise with strict turns only (collinear boundary
//!   points are dropped).
//! - Empty input fails with `InvalidInput`; fewer than 3 hull vertices fails
//!   with `DegenerateResult`.

mod monotone;
mod quadrant;

use nalgebra::Point2;

use crate::bounds::Bounds;
use crate::error::{GeomError, Result};
use crate::orient::is_strictly_ccw;
use crate::polygon::ConvexPolygon;
use crate::polyline::PolyLine2;

pub use monotone::{monotone_chain_hull, monotone_chain_hull_in_place};
pub use quadrant::quadrant_filter_hull;

/// Shapes that contribute points to a hull.
pub trait PointSet2 {
    fn hull_points(&self) -> Vec<Point2<f64>>;
}

impl PointSet2 for [Point2<f64>] {
    fn hull_points(&self) -> Vec<Point2<f64>> {
        self.to_vec()
    }
}

impl PointSet2 for Vec<Point2<f64>> {
    fn hull_points(&self) -> Vec<Point2<f64>> {
        self.clone()
    }
}

impl PointSet2 for Bounds<2> {
    fn hull_points(&self) -> Vec<Point2<f64>> {
        self.corners().to_vec()
    }
}

impl PointSet2 for ConvexPolygon {
    fn hull_points(&self) -> Vec<Point2<f64>> {
        self.points().to_vec()
    }
}

impl PointSet2 for PolyLine2 {
    fn hull_points(&self) -> Vec<Point2<f64>> {
        self.points().to_vec()
    }
}

/// Hull of a single-pass sequence of points.
pub fn convex_hull<I>(points: I) -> Result<ConvexPolygon>
where
    I: IntoIterator<Item = Point2<f64>>,
{
    let pts: Vec<Point2<f64>> = points.into_iter().collect();
    quadrant_filter_hull(&pts)
}

/// Hull of a point slice; the slice is not modified.
#[inline]
pub fn convex_hull_slice(points: &[Point2<f64>]) -> Result<ConvexPolygon> {
    quadrant_filter_hull(points)
}

/// Hull of the union of the points of one or more shapes.
///
/// Accepts homogeneous collections (`&[PolyLine2]`) as well as trait objects
/// (`[&a as &dyn PointSet2, &b]`).
pub fn convex_hull_of<'a, S, I>(shapes: I) -> Result<ConvexPolygon>
where
    S: PointSet2 + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut pts = Vec::new();
    let mut count = 0usize;
    for s in shapes {
        pts.extend(s.hull_points());
        count += 1;
    }
    if count == 0 {
        return Err(GeomError::invalid("no shapes given for convex hull"));
    }
    tracing::trace!(shapes = count, points = pts.len(), "convex_hull_of");
    quadrant_filter_hull(&pts)
}

/// Shared input checks: non-empty, all coordinates finite.
fn validate_points(points: &[Point2<f64>]) -> Result<()> {
    if points.is_empty() {
        return Err(GeomError::invalid("empty point set for convex hull"));
    }
    if let Some((i, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(GeomError::invalid(format!(
            "non-finite point {p:?} at index {i}"
        )));
    }
    Ok(())
}

/// Stack step shared by both algorithms: skip exact repeats of the last point,
/// pop while the last two points and `p` fail to make a strict CCW turn, push.
#[inline]
fn push_hull_point(hull: &mut Vec<Point2<f64>>, p: Point2<f64>) {
    if hull.last() == Some(&p) {
        return;
    }
    while hull.len() >= 2 && !is_strictly_ccw(&hull[hull.len() - 2], &hull[hull.len() - 1], &p) {
        hull.pop();
    }
    hull.push(p);
}
