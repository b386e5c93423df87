//! Offset-line contract.
//!
//! The curve construction itself belongs to a `LineOffsetter` supplied by the
//! caller; this module fixes the parameter set, its defaults, and the input
//! checks every implementation can rely on.

use super::PolyLine2;
use crate::error::{GeomError, Result};

/// Parameters of the offset construction.
///
/// Invariants (checked by `validate`):
/// - All values finite and strictly positive.
/// - `offset_minimum_filter_value < offset_maximum_filter_value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetCfg {
    /// Maximum deviation of generated arcs from a true circle.
    pub circle_precision: f64,
    /// Noise filter applied to the input at small offsets.
    pub offset_minimum_filter_value: f64,
    /// Noise filter cap at large offsets.
    pub offset_maximum_filter_value: f64,
    /// Offset / filter value ratio between the two caps.
    pub offset_filter_ratio: f64,
    /// Offsets below this magnitude return the input unchanged.
    pub minimum_offset: f64,
}

impl Default for OffsetCfg {
    fn default() -> Self {
        Self {
            circle_precision: 0.001,
            offset_minimum_filter_value: 0.001,
            offset_maximum_filter_value: 0.1,
            offset_filter_ratio: 10.0,
            minimum_offset: 0.00001,
        }
    }
}

impl OffsetCfg {
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("circle_precision", self.circle_precision),
            ("offset_minimum_filter_value", self.offset_minimum_filter_value),
            ("offset_maximum_filter_value", self.offset_maximum_filter_value),
            ("offset_filter_ratio", self.offset_filter_ratio),
            ("minimum_offset", self.minimum_offset),
        ];
        if let Some((name, v)) = named.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(GeomError::invalid(format!(
                "{name} must be finite and positive, got {v}"
            )));
        }
        if self.offset_minimum_filter_value >= self.offset_maximum_filter_value {
            return Err(GeomError::invalid(format!(
                "offset_minimum_filter_value {} must be below offset_maximum_filter_value {}",
                self.offset_minimum_filter_value, self.offset_maximum_filter_value
            )));
        }
        Ok(())
    }
}

/// Offset-curve construction (positive offsets to the left of travel).
pub trait LineOffsetter {
    fn offset_line(&self, line: &PolyLine2, offset: f64, cfg: &OffsetCfg) -> Result<PolyLine2>;
}

/// Offset with the default parameter set.
pub fn offset_line<O: LineOffsetter + ?Sized>(
    line: &PolyLine2,
    offset: f64,
    offsetter: &O,
) -> Result<PolyLine2> {
    offset_line_with(line, offset, offsetter, &OffsetCfg::default())
}

/// Offset with an explicit parameter set.
///
/// Fails with `OutOfRange` for a non-finite offset and `InvalidInput` for an
/// invalid `cfg`. Offsets smaller than `cfg.minimum_offset` return the line.
pub fn offset_line_with<O: LineOffsetter + ?Sized>(
    line: &PolyLine2,
    offset: f64,
    offsetter: &O,
    cfg: &OffsetCfg,
) -> Result<PolyLine2> {
    if !offset.is_finite() {
        return Err(GeomError::out_of_range(format!(
            "offset {offset} is not finite"
        )));
    }
    cfg.validate()?;
    if offset.abs() < cfg.minimum_offset {
        return Ok(line.clone());
    }
    offsetter.offset_line(line, offset, cfg)
}
