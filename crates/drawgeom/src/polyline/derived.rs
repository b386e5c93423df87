//! Free functions layered on the core `PolyLine` queries.

use super::PolyLine;
use crate::error::{GeomError, Result};
use crate::ray::Ray;

/// Same points in opposite order.
///
/// Fails with `DegenerateResult` only if re-accumulating the lengths from the
/// other end swallows a segment in rounding.
pub fn reverse<const D: usize>(line: &PolyLine<D>) -> Result<PolyLine<D>> {
    let mut pts = line.points().to_vec();
    pts.reverse();
    PolyLine::derived(pts, "reversed line")
}

fn check_fraction(fraction: f64) -> Result<()> {
    if !(fraction.is_finite() && (0.0..=1.0).contains(&fraction)) {
        return Err(GeomError::out_of_range(format!(
            "fraction {fraction} not in [0, 1]"
        )));
    }
    Ok(())
}

/// `location(fraction * length)`; fraction must lie in `[0, 1]`.
pub fn location_fraction<const D: usize>(line: &PolyLine<D>, fraction: f64) -> Result<Ray<D>> {
    check_fraction(fraction)?;
    line.location(fraction * line.length())
}

/// Like `location_fraction`, but fractions within `tolerance` outside `[0, 1]`
/// are clamped onto the nearest end.
pub fn location_fraction_tolerant<const D: usize>(
    line: &PolyLine<D>,
    fraction: f64,
    tolerance: f64,
) -> Result<Ray<D>> {
    if !(fraction.is_finite() && tolerance.is_finite())
        || fraction < -tolerance
        || fraction > 1.0 + tolerance
    {
        return Err(GeomError::out_of_range(format!(
            "fraction {fraction} not in [0, 1] within tolerance {tolerance}"
        )));
    }
    location_fraction(line, fraction.clamp(0.0, 1.0))
}

/// `location_extended(fraction * length)` for any finite fraction.
pub fn location_fraction_extended<const D: usize>(
    line: &PolyLine<D>,
    fraction: f64,
) -> Result<Ray<D>> {
    if !fraction.is_finite() {
        return Err(GeomError::out_of_range(format!(
            "fraction {fraction} is not finite"
        )));
    }
    line.location_extended(fraction * line.length())
}

/// `extract(start * length, end * length)`; requires `0 <= start < end <= 1`.
pub fn extract_fractional<const D: usize>(
    line: &PolyLine<D>,
    start: f64,
    end: f64,
) -> Result<PolyLine<D>> {
    if !(start.is_finite() && end.is_finite() && 0.0 <= start && start < end && end <= 1.0) {
        return Err(GeomError::invalid(format!(
            "fractional bounds require 0 <= start < end <= 1, got start {start}, end {end}"
        )));
    }
    let length = line.length();
    line.extract(start * length, end * length)
}
