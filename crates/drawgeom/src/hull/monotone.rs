//! Andrew's monotone chain convex hull.
//!
//! Sort by (x, y), sweep left to right for the lower chain, then continue the
//! same stack right to left for the upper chain. The last point pushed repeats
//! the first and is dropped.

use std::cmp::Ordering;

use nalgebra::Point2;

use super::validate_points;
use crate::error::Result;
use crate::orient::is_strictly_ccw;
use crate::polygon::ConvexPolygon;

/// Hull of `points` via monotone chain; works on an owned copy.
pub fn monotone_chain_hull(points: &[Point2<f64>]) -> Result<ConvexPolygon> {
    validate_points(points)?;
    let mut pts = points.to_vec();
    sweep(&mut pts)
}

/// Like `monotone_chain_hull`, but sorts the caller's slice in place.
///
/// Saves the copy on large inputs. Afterwards `points` is ordered by (x, y);
/// the caller must hold exclusive access for the duration of the call.
pub fn monotone_chain_hull_in_place(points: &mut [Point2<f64>]) -> Result<ConvexPolygon> {
    validate_points(points)?;
    sweep(points)
}

fn sweep(pts: &mut [Point2<f64>]) -> Result<ConvexPolygon> {
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    let n = pts.len();
    let mut hull: Vec<Point2<f64>> = Vec::with_capacity(2 * n);
    for p in pts.iter() {
        while hull.len() >= 2 && !is_strictly_ccw(&hull[hull.len() - 2], &hull[hull.len() - 1], p) {
            hull.pop();
        }
        hull.push(*p);
    }
    // Upper chain may not pop into the lower chain.
    let floor = hull.len() + 1;
    for p in pts[..n - 1].iter().rev() {
        while hull.len() >= floor
            && !is_strictly_ccw(&hull[hull.len() - 2], &hull[hull.len() - 1], p)
        {
            hull.pop();
        }
        hull.push(*p);
    }
    hull.pop();
    tracing::debug!(input = n, hull = hull.len(), "monotone_chain_hull");
    ConvexPolygon::from_hull(hull)
}
