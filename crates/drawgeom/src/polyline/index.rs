//! Cumulative arc-length table plus bounding extent, built in one pass.

use nalgebra::{distance, Point};

use crate::bounds::Bounds;
use crate::error::{GeomError, Result};

/// Immutable cumulative-length table parallel to a point sequence.
///
/// Invariants:
/// - `lengths[0] == 0.0`, `lengths[i] = lengths[i-1] + |p[i] - p[i-1]|`.
/// - Strictly increasing; the last entry is the total length.
/// - `bounds` encloses every point.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLengthIndex<const D: usize> {
    lengths: Vec<f64>,
    bounds: Bounds<D>,
}

impl<const D: usize> ArcLengthIndex<D> {
    /// Validate `points` and build the table.
    ///
    /// Fails with `InvalidInput` for fewer than 2 points, non-finite
    /// coordinates, identical adjacent points, or a segment too short to
    /// advance the cumulative length in floating point.
    pub fn build(points: &[Point<f64, D>]) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeomError::invalid(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            )));
        }
        let finite = |p: &Point<f64, D>| p.coords.iter().all(|c| c.is_finite());
        if !finite(&points[0]) {
            return Err(GeomError::invalid(format!(
                "non-finite point {:?} at index 0",
                points[0]
            )));
        }
        let mut lengths = Vec::with_capacity(points.len());
        let mut bounds = Bounds::of_point(&points[0]);
        lengths.push(0.0);
        let mut acc = 0.0;
        for (i, w) in points.windows(2).enumerate() {
            let (a, b) = (&w[0], &w[1]);
            if !finite(b) {
                return Err(GeomError::invalid(format!(
                    "non-finite point {:?} at index {}",
                    b,
                    i + 1
                )));
            }
            if a == b {
                return Err(GeomError::invalid(format!(
                    "degenerate: points {} and {} are identical ({:?})",
                    i,
                    i + 1,
                    b
                )));
            }
            let next = acc + distance(a, b);
            if next <= acc {
                return Err(GeomError::invalid(format!(
                    "degenerate: segment {} is too short to advance the length {}",
                    i, acc
                )));
            }
            acc = next;
            lengths.push(acc);
            bounds.extend(b);
        }
        Ok(Self { lengths, bounds })
    }

    /// Total length (last table entry).
    #[inline]
    pub fn total(&self) -> f64 {
        self.lengths[self.lengths.len() - 1]
    }

    #[inline]
    pub fn at(&self, i: usize) -> Option<f64> {
        self.lengths.get(i).copied()
    }

    #[inline]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds<D> {
        &self.bounds
    }
}
