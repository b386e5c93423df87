//! Axis-aligned bounding extent in D dimensions.

use nalgebra::{Point, Point2};

/// Closed axis-aligned box `[min, max]`.
///
/// Invariants:
/// - `min[k] <= max[k]` for every axis `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<const D: usize> {
    pub min: Point<f64, D>,
    pub max: Point<f64, D>,
}

impl<const D: usize> Bounds<D> {
    /// Degenerate box around a single point.
    #[inline]
    pub fn of_point(p: &Point<f64, D>) -> Self {
        Self { min: *p, max: *p }
    }

    /// Smallest box containing all points, or `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<f64, D>>,
    {
        let mut it = points.into_iter();
        let mut b = Self::of_point(it.next()?);
        for p in it {
            b.extend(p);
        }
        Some(b)
    }

    /// Grow the box to include `p`.
    #[inline]
    pub fn extend(&mut self, p: &Point<f64, D>) {
        self.min = Point::from(self.min.coords.inf(&p.coords));
        self.max = Point::from(self.max.coords.sup(&p.coords));
    }

    #[inline]
    pub fn contains(&self, p: &Point<f64, D>) -> bool {
        (0..D).all(|k| self.min[k] <= p[k] && p[k] <= self.max[k])
    }

    /// Extent along axis `k`.
    #[inline]
    pub fn extent(&self, k: usize) -> f64 {
        self.max[k] - self.min[k]
    }
}

impl Bounds<2> {
    /// Corners in counterclockwise order starting at `min`.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}
