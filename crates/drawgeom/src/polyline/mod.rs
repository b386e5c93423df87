//! Arc-length indexed polylines in D dimensions.
//!
//! Purpose
//! - An immutable ordered point sequence with a cached cumulative-length
//!   table, answering "where am I after travelling s along the line" exactly.
//!
//! Layout
//! - `index`: `ArcLengthIndex` (length table and bounds, one forward pass).
//! - `locate`: `find`, `location`, `location_extended`.
//! - `extract`: sub-lines (`extract`, `truncate`), `noise_filtered_line`, `concatenate`.
//! - `derived`: free functions layered on the above (`reverse`, fractional wrappers).
//! - `offset`: the offset-line contract and its `OffsetCfg` defaults.
//!
//! Conventions
//! - At least 2 points, all finite, no two consecutive points identical.
//! - Every transformation returns a new `PolyLine`; nothing mutates in place.
//! - One generic implementation over `const D: usize`; `PolyLine2`/`PolyLine3`
//!   add coordinate accessors.

mod derived;
mod extract;
mod index;
mod locate;
mod offset;

use std::fmt::Write as _;

use nalgebra::Point;

use crate::bounds::Bounds;
use crate::error::{GeomError, Result};

pub use derived::{
    extract_fractional, location_fraction, location_fraction_extended,
    location_fraction_tolerant, reverse,
};
pub use index::ArcLengthIndex;
pub use offset::{offset_line, offset_line_with, LineOffsetter, OffsetCfg};

/// Ordered point sequence with arc-length queries.
///
/// Invariants:
/// - `points.len() >= 2`, finite coordinates, no identical neighbours.
/// - `index` is built from `points` at construction and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyLine<const D: usize> {
    points: Vec<Point<f64, D>>,
    index: ArcLengthIndex<D>,
}

pub type PolyLine2 = PolyLine<2>;
pub type PolyLine3 = PolyLine<3>;

impl<const D: usize> PolyLine<D> {
    /// Build from owned points.
    ///
    /// Fails with `InvalidInput` for fewer than 2 points, non-finite
    /// coordinates, or identical consecutive points.
    pub fn new(points: Vec<Point<f64, D>>) -> Result<Self> {
        let index = ArcLengthIndex::build(&points)?;
        Ok(Self { points, index })
    }

    #[inline]
    pub fn from_slice(points: &[Point<f64, D>]) -> Result<Self> {
        Self::new(points.to_vec())
    }

    /// Build from a single-pass sequence.
    pub fn try_from_iter<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point<f64, D>>,
    {
        Self::new(points.into_iter().collect())
    }

    /// Drop consecutive duplicates first, then build.
    pub fn cleaned(mut points: Vec<Point<f64, D>>) -> Result<Self> {
        points.dedup();
        if points.len() < 2 {
            return Err(GeomError::invalid(format!(
                "polyline needs at least 2 distinct points, got {}",
                points.len()
            )));
        }
        Self::new(points)
    }

    /// Build a derived line; construction failures become `DegenerateResult`.
    pub(crate) fn derived(points: Vec<Point<f64, D>>, what: &str) -> Result<Self> {
        Self::new(points).map_err(|e| match e {
            GeomError::InvalidInput(msg) => GeomError::degenerate(format!("{what}: {msg}")),
            other => other,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn get(&self, i: usize) -> Result<Point<f64, D>> {
        self.points.get(i).copied().ok_or_else(|| {
            GeomError::out_of_range(format!("point index {i} not in [0, {})", self.points.len()))
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point<f64, D>] {
        &self.points
    }

    #[inline]
    pub fn first(&self) -> Point<f64, D> {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> Point<f64, D> {
        self.points[self.points.len() - 1]
    }

    /// Total length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.index.total()
    }

    /// Cumulative length at point `i`.
    pub fn length_at_index(&self, i: usize) -> Result<f64> {
        self.index.at(i).ok_or_else(|| {
            GeomError::out_of_range(format!("point index {i} not in [0, {})", self.points.len()))
        })
    }

    /// Length of segment `i` (from point `i` to `i + 1`).
    pub fn segment_length(&self, i: usize) -> Result<f64> {
        if i + 1 >= self.points.len() {
            return Err(GeomError::out_of_range(format!(
                "segment index {i} not in [0, {})",
                self.points.len() - 1
            )));
        }
        let l = self.index.lengths();
        Ok(l[i + 1] - l[i])
    }

    #[inline]
    pub fn index(&self) -> &ArcLengthIndex<D> {
        &self.index
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds<D> {
        self.index.bounds()
    }

    /// Tab-separated coordinates, one point per line, for plotting tools.
    pub fn to_table(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 16 * D);
        for p in &self.points {
            for k in 0..D {
                if k > 0 {
                    out.push('\t');
                }
                let _ = write!(out, "{}", p[k]);
            }
            out.push('\n');
        }
        out
    }
}

impl PolyLine<2> {
    pub fn x(&self, i: usize) -> Result<f64> {
        self.get(i).map(|p| p.x)
    }
    pub fn y(&self, i: usize) -> Result<f64> {
        self.get(i).map(|p| p.y)
    }
}

impl PolyLine<3> {
    pub fn x(&self, i: usize) -> Result<f64> {
        self.get(i).map(|p| p.x)
    }
    pub fn y(&self, i: usize) -> Result<f64> {
        self.get(i).map(|p| p.y)
    }
    pub fn z(&self, i: usize) -> Result<f64> {
        self.get(i).map(|p| p.z)
    }
}
