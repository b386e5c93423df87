//! Exact-answer geometry for simulation and drawing code.
//!
//! Two families of algorithms live here:
//! - 2D convex hulls (`hull`): an extreme-point quadrant filter and Andrew's
//!   monotone chain, cross-checked against each other in tests.
//! - Arc-length indexed polylines (`polyline`): cumulative length table,
//!   position lookup with interpolation/extrapolation, sub-line extraction.
//!
//! Conventions
//! - Points are `nalgebra::Point<f64, D>`; every constructor rejects
//!   non-finite coordinates.
//! - All constructed values are immutable; transformations return new values.
//! - Fallible operations return `error::Result`; see `GeomError` for the taxonomy.

pub mod bounds;
pub mod error;
pub mod hull;
pub mod orient;
pub mod polygon;
pub mod polyline;
pub mod ray;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};
pub use nalgebra::{Point2, Point3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::error::{GeomError, Result};
    pub use crate::hull::{
        convex_hull, convex_hull_of, convex_hull_slice, monotone_chain_hull,
        monotone_chain_hull_in_place, quadrant_filter_hull, PointSet2,
    };
    pub use crate::orient::is_strictly_ccw;
    pub use crate::polygon::ConvexPolygon;
    pub use crate::polyline::{
        extract_fractional, location_fraction, location_fraction_extended,
        location_fraction_tolerant, offset_line, offset_line_with, reverse, LineOffsetter,
        OffsetCfg, PolyLine, PolyLine2, PolyLine3,
    };
    pub use crate::ray::{Ray, Ray2, Ray3};
    pub use nalgebra::{Point2, Point3};
}
