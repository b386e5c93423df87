//! Position lookup: bracketing search, interpolation and extrapolation.

use nalgebra::Point;

use super::PolyLine;
use crate::error::{GeomError, Result};
use crate::ray::Ray;

impl<const D: usize> PolyLine<D> {
    /// Index `i` of the segment with `length_at_index(i) <= position <= length_at_index(i + 1)`.
    ///
    /// `position == 0` maps to 0 and `position == length()` to `size() - 2`.
    /// Fails with `OutOfRange` for positions outside `[0, length()]` or non-finite.
    pub fn find(&self, position: f64) -> Result<usize> {
        self.check_position(position)?;
        Ok(self.find_unchecked(position))
    }

    /// Binary search on the length table; `position` is finite and in range.
    pub(crate) fn find_unchecked(&self, position: f64) -> usize {
        if position == 0.0 {
            return 0;
        }
        let l = self.index.lengths();
        // Loop invariant: l[lo] <= position <= l[hi + 1].
        let mut lo = 0usize;
        let mut hi = l.len() - 2;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if position < l[mid] {
                hi = mid - 1;
            } else if position > l[mid + 1] {
                lo = mid + 1;
            } else {
                return mid;
            }
        }
        debug_assert!(
            l[lo] <= position && position <= l[lo + 1],
            "position {position} not bracketed by segment {lo}"
        );
        lo
    }

    fn check_position(&self, position: f64) -> Result<()> {
        if !position.is_finite() || position < 0.0 || position > self.length() {
            return Err(GeomError::out_of_range(format!(
                "position {} not in [0, {}]",
                position,
                self.length()
            )));
        }
        Ok(())
    }

    /// Ray at `at` with the heading of segment `i` (never zero length).
    fn segment_ray(&self, i: usize, at: Point<f64, D>) -> Ray<D> {
        let d = self.points[i + 1] - self.points[i];
        Ray {
            point: at,
            dir: d / d.norm(),
        }
    }

    /// Point and heading at `position` along the line.
    ///
    /// Boundaries use the first and last segment's heading directly. Fails with
    /// `OutOfRange` outside `[0, length()]`.
    pub fn location(&self, position: f64) -> Result<Ray<D>> {
        self.check_position(position)?;
        let n = self.points.len();
        if position == 0.0 {
            return Ok(self.segment_ray(0, self.points[0]));
        }
        if position == self.length() {
            return Ok(self.segment_ray(n - 2, self.points[n - 1]));
        }
        let i = self.find_unchecked(position);
        let l = self.index.lengths();
        let frac = (position - l[i]) / (l[i + 1] - l[i]);
        let a = self.points[i];
        let p = a + (self.points[i + 1] - a) * frac;
        Ok(self.segment_ray(i, p))
    }

    /// Like `location`, but positions beyond either end extend the first or
    /// last segment in a straight line. Fails with `OutOfRange` if not finite.
    pub fn location_extended(&self, position: f64) -> Result<Ray<D>> {
        if !position.is_finite() {
            return Err(GeomError::out_of_range(format!(
                "position {position} is not finite"
            )));
        }
        if position < 0.0 {
            let r = self.segment_ray(0, self.points[0]);
            return Ok(Ray {
                point: r.point_at(position),
                dir: r.dir,
            });
        }
        let length = self.length();
        if position <= length {
            return self.location(position);
        }
        let n = self.points.len();
        let l = self.index.lengths();
        // The table is strictly increasing, so the last segment is normally used;
        // walk back only if it somehow carries no length.
        let mut i = n - 2;
        while i > 0 && l[i + 1] - l[i] <= 0.0 {
            i -= 1;
        }
        let r = self.segment_ray(i, self.points[n - 1]);
        Ok(Ray {
            point: r.point_at(position - length),
            dir: r.dir,
        })
    }
}
