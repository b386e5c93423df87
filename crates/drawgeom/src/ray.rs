//! Directed rays: a point plus a unit direction.
//!
//! Location queries on polylines return a `Ray`, so the direction of travel
//! comes along with the position. Angles are derived from the unit vector on
//! demand (`dir_z` in 2D; `dir_y`, `dir_z` in 3D).

use std::f64::consts::PI;

use nalgebra::{Point, SVector};

/// Point with a unit direction vector.
///
/// Invariants:
/// - `dir` has unit length (callers inside the crate normalize before construction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<const D: usize> {
    pub point: Point<f64, D>,
    pub dir: SVector<f64, D>,
}

pub type Ray2 = Ray<2>;
pub type Ray3 = Ray<3>;

impl<const D: usize> Ray<D> {
    /// Ray at `point` heading along `dir` (normalized here).
    ///
    /// Returns `None` if `dir` is zero or not finite.
    pub fn new(point: Point<f64, D>, dir: SVector<f64, D>) -> Option<Self> {
        let norm = dir.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        Some(Self {
            point,
            dir: dir / norm,
        })
    }

    /// Ray at `from` heading towards `to`; `None` if the points coincide.
    #[inline]
    pub fn through(from: &Point<f64, D>, to: &Point<f64, D>) -> Option<Self> {
        Self::new(*from, to - from)
    }

    /// Point at signed `distance` along the ray (negative goes backwards).
    #[inline]
    pub fn point_at(&self, distance: f64) -> Point<f64, D> {
        self.point + self.dir * distance
    }

    /// Same point, opposite direction.
    #[inline]
    pub fn flip(&self) -> Self {
        Self {
            point: self.point,
            dir: -self.dir,
        }
    }
}

/// Difference of two angles wrapped into (-π, π].
#[inline]
fn angle_diff(a: f64, b: f64) -> f64 {
    let mut x = (a - b) % (2.0 * PI);
    if x <= -PI {
        x += 2.0 * PI;
    } else if x > PI {
        x -= 2.0 * PI;
    }
    x
}

#[inline]
fn points_close<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>, eps: f64) -> bool {
    (0..D).all(|k| (a[k] - b[k]).abs() <= eps)
}

impl Ray<2> {
    /// Ray at `point` with heading angle `dir_z` (radians from +x, counterclockwise).
    pub fn from_angle(point: Point<f64, 2>, dir_z: f64) -> Option<Self> {
        if !dir_z.is_finite() {
            return None;
        }
        Self::new(point, SVector::<f64, 2>::new(dir_z.cos(), dir_z.sin()))
    }

    /// Heading angle in (-π, π].
    #[inline]
    pub fn dir_z(&self) -> f64 {
        self.dir.y.atan2(self.dir.x)
    }

    /// Per-coordinate point check and heading check modulo 2π.
    pub fn eps_equals(&self, other: &Self, eps_coordinate: f64, eps_rotation: f64) -> bool {
        points_close(&self.point, &other.point, eps_coordinate)
            && angle_diff(self.dir_z(), other.dir_z()).abs() <= eps_rotation
    }
}

impl Ray<3> {
    /// Ray from spherical angles: `dir_y` from the +z axis, `dir_z` azimuth from +x.
    pub fn from_angles(point: Point<f64, 3>, dir_y: f64, dir_z: f64) -> Option<Self> {
        if !dir_y.is_finite() || !dir_z.is_finite() {
            return None;
        }
        let s = dir_y.sin();
        Self::new(
            point,
            SVector::<f64, 3>::new(dir_z.cos() * s, dir_z.sin() * s, dir_y.cos()),
        )
    }

    /// Polar angle from +z in [0, π].
    #[inline]
    pub fn dir_y(&self) -> f64 {
        self.dir.z.clamp(-1.0, 1.0).acos()
    }

    /// Azimuth in (-π, π]; 0 when the direction is parallel to the z axis.
    #[inline]
    pub fn dir_z(&self) -> f64 {
        self.dir.y.atan2(self.dir.x)
    }

    /// Per-coordinate point check; `dir_y` and `dir_z` compared independently modulo 2π.
    ///
    /// Known limitation: equivalent headings are not recognized when the azimuth
    /// is ill-conditioned (direction near ±z) or when one heading is written with
    /// `dir_y` offset by π and `dir_z` flipped. Two such rays compare unequal.
    pub fn eps_equals(&self, other: &Self, eps_coordinate: f64, eps_rotation: f64) -> bool {
        points_close(&self.point, &other.point, eps_coordinate)
            && angle_diff(self.dir_y(), other.dir_y()).abs() <= eps_rotation
            && angle_diff(self.dir_z(), other.dir_z()).abs() <= eps_rotation
    }
}
