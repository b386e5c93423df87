//! Closed convex polygons in counterclockwise order.

use nalgebra::Point2;

use crate::bounds::Bounds;
use crate::error::{GeomError, Result};
use crate::orient::is_strictly_ccw;

/// Closed, strictly convex polygon.
///
/// Invariants:
/// - At least 3 vertices, all finite.
/// - Counterclockwise; every consecutive triple (cyclically) is a strict CCW turn.
/// - The closing edge is implicit; the first vertex is not repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point2<f64>>,
}

impl ConvexPolygon {
    /// Validated constructor.
    ///
    /// Fails with `DegenerateResult` below 3 points and with `InvalidInput`
    /// for non-finite coordinates or any non-strict turn.
    pub fn new(points: Vec<Point2<f64>>) -> Result<Self> {
        let poly = Self::from_hull(points)?;
        if let Some(p) = poly.points.iter().find(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(GeomError::invalid(format!("non-finite vertex {p:?}")));
        }
        let n = poly.points.len();
        for i in 0..n {
            let a = &poly.points[i];
            let b = &poly.points[(i + 1) % n];
            let c = &poly.points[(i + 2) % n];
            if !is_strictly_ccw(a, b, c) {
                return Err(GeomError::invalid(format!(
                    "vertices {:?}, {:?}, {:?} do not form a strict counterclockwise turn",
                    a, b, c
                )));
            }
        }
        Ok(poly)
    }

    /// Wrap a hull result; only the vertex count is checked.
    pub(crate) fn from_hull(points: Vec<Point2<f64>>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeomError::degenerate(format!(
                "polygon needs at least 3 vertices, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn get(&self, i: usize) -> Result<Point2<f64>> {
        self.points.get(i).copied().ok_or_else(|| {
            GeomError::out_of_range(format!("vertex index {i} not in [0, {})", self.points.len()))
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds<2> {
        let mut b = Bounds::of_point(&self.points[0]);
        for p in &self.points[1..] {
            b.extend(p);
        }
        b
    }
}
