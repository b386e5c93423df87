//! Sub-lines: extraction, truncation, noise filtering, concatenation.

use nalgebra::{distance, Point};

use super::PolyLine;
use crate::error::{GeomError, Result};

/// Append `p` unless it repeats the last point.
#[inline]
fn push_distinct<const D: usize>(out: &mut Vec<Point<f64, D>>, p: Point<f64, D>) {
    if out.last() != Some(&p) {
        out.push(p);
    }
}

impl<const D: usize> PolyLine<D> {
    /// Point at `position` on segment `i`, reusing the vertex on an exact table hit.
    fn point_on_segment(&self, i: usize, position: f64) -> Point<f64, D> {
        let l = self.index.lengths();
        if position == l[i] {
            return self.points[i];
        }
        if position == l[i + 1] {
            return self.points[i + 1];
        }
        let a = self.points[i];
        a + (self.points[i + 1] - a) * ((position - l[i]) / (l[i + 1] - l[i]))
    }

    /// Part of the line between arc-length positions `start` and `end`.
    ///
    /// Requires `0 <= start < end <= length()` (else `InvalidInput`). Cut points
    /// are interpolated unless they hit a vertex exactly; whole vertices strictly
    /// between the cuts are copied. Fails with `DegenerateResult` if rounding
    /// collapses the interval.
    pub fn extract(&self, start: f64, end: f64) -> Result<Self> {
        let length = self.length();
        if !(start.is_finite() && end.is_finite() && 0.0 <= start && start < end && end <= length)
        {
            return Err(GeomError::invalid(format!(
                "extract bounds require 0 <= start < end <= {length}, got start {start}, end {end}"
            )));
        }
        if start == 0.0 && end == length {
            return Ok(self.clone());
        }
        let l = self.index.lengths();
        let n = self.points.len();
        // Segment holding `start`: last i with l[i] <= start.
        let mut first = 0;
        while first < n - 2 && l[first + 1] <= start {
            first += 1;
        }
        // Segment holding `end`: first j >= first with end <= l[j + 1].
        let mut last = first;
        while last < n - 2 && l[last + 1] < end {
            last += 1;
        }
        tracing::trace!(start, end, first, last, "extract");

        let mut out = Vec::with_capacity(last - first + 2);
        out.push(self.point_on_segment(first, start));
        for k in first + 1..=last {
            push_distinct(&mut out, self.points[k]);
        }
        push_distinct(&mut out, self.point_on_segment(last, end));
        if out.len() < 2 {
            return Err(GeomError::degenerate(format!(
                "interval too short: [{start}, {end}]"
            )));
        }
        Self::derived(out, "interval too short")
    }

    /// First part of the line up to arc-length `position`.
    ///
    /// Requires `0 < position <= length()` (else `InvalidInput`); returns the
    /// line itself when `position == length()`. A position that hits a vertex
    /// exactly ends the result on that vertex.
    pub fn truncate(&self, position: f64) -> Result<Self> {
        let length = self.length();
        if !(position.is_finite() && 0.0 < position && position <= length) {
            return Err(GeomError::invalid(format!(
                "truncate position {position} not in (0, {length}]"
            )));
        }
        if position == length {
            return Ok(self.clone());
        }
        let l = self.index.lengths();
        let mut i = self.find_unchecked(position);
        let end = if position == l[i + 1] {
            i += 1;
            None
        } else if position == l[i] {
            None
        } else {
            Some(self.point_on_segment(i, position))
        };
        let mut out = self.points[..=i].to_vec();
        if let Some(p) = end {
            push_distinct(&mut out, p);
        }
        Self::derived(out, "truncated line")
    }

    /// Drop points closer than `noise_level` to the last kept point.
    ///
    /// The first and last points always survive; when the last point is
    /// filtered out, it replaces the last kept point instead. If only the two
    /// endpoints remain and they coincide (closed loop), the original second
    /// point is kept between them. Fails with `OutOfRange` for a negative or
    /// non-finite `noise_level`.
    pub fn noise_filtered_line(&self, noise_level: f64) -> Result<Self> {
        if !(noise_level.is_finite() && noise_level >= 0.0) {
            return Err(GeomError::out_of_range(format!(
                "noise level {noise_level} must be finite and non-negative"
            )));
        }
        let n = self.points.len();
        if n <= 2 {
            return Ok(self.clone());
        }
        let mut out: Vec<Point<f64, D>> = Vec::with_capacity(n);
        out.push(self.points[0]);
        let mut prev = self.points[0];
        for (k, cur) in self.points.iter().enumerate().skip(1) {
            if distance(&prev, cur) < noise_level {
                if k == n - 1 {
                    if out.len() == 1 {
                        out.push(*cur);
                    } else {
                        let m = out.len() - 1;
                        out[m] = *cur;
                    }
                }
                continue;
            }
            out.push(*cur);
            prev = *cur;
        }
        if out.len() == n {
            return Ok(self.clone());
        }
        if out.len() == 2 && out[0] == out[1] {
            out.insert(1, self.points[1]);
        }
        tracing::debug!(before = n, after = out.len(), noise_level, "noise_filtered_line");
        Self::derived(out, "noise filter")
    }

    /// Join lines end to start.
    ///
    /// Each line must start within `tolerance` of where the previous one ends;
    /// its first point is then dropped in favour of the previous end point.
    /// Fails with `InvalidInput` for an empty list, a negative tolerance, or a gap.
    pub fn concatenate(lines: &[&Self], tolerance: f64) -> Result<Self> {
        let Some((head, tail)) = lines.split_first() else {
            return Err(GeomError::invalid("no lines to concatenate"));
        };
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(GeomError::invalid(format!(
                "tolerance {tolerance} must be finite and non-negative"
            )));
        }
        let mut out = head.points.clone();
        for (k, line) in tail.iter().enumerate() {
            let end = out[out.len() - 1];
            let gap = distance(&end, &line.first());
            if gap > tolerance {
                return Err(GeomError::invalid(format!(
                    "gap {gap} between line {} and line {} exceeds tolerance {tolerance}",
                    k,
                    k + 1
                )));
            }
            for p in &line.points[1..] {
                push_distinct(&mut out, *p);
            }
        }
        Self::new(out)
    }
}
