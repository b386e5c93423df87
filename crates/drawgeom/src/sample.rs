//! Random point clouds and random-walk polylines (replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers for benches, hull cross-checks and
//!   experiments. Every draw is reproducible from `(seed, index)`.
//!
//! Model
//! - Clouds: uniform in a disk (area-uniform radius) or an axis-aligned square.
//! - Walks: start at the origin, turn by a bounded random angle, step a random
//!   strictly positive length, so consecutive points never repeat.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::polyline::PolyLine2;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Region a cloud is drawn from, centered on the origin.
#[derive(Clone, Copy, Debug)]
pub enum CloudShape {
    Disk { radius: f64 },
    Square { half_width: f64 },
}

/// Point cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: CloudShape::Disk { radius: 1.0 },
        }
    }
}

/// Random-walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of segments; at least 1.
    pub segments: usize,
    /// Step length range; the lower end is clamped to a small positive value.
    pub step_min: f64,
    pub step_max: f64,
    /// Maximum heading change per step (radians).
    pub max_turn: f64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            segments: 100,
            step_min: 0.1,
            step_max: 1.0,
            max_turn: 0.5,
        }
    }
}

/// Draw `cfg.count` points.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Disk { radius } => {
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point2::new(r * th.cos(), r * th.sin())
            }
            CloudShape::Square { half_width } => {
                let h = half_width.abs();
                Point2::new(
                    (rng.gen::<f64>() * 2.0 - 1.0) * h,
                    (rng.gen::<f64>() * 2.0 - 1.0) * h,
                )
            }
        })
        .collect()
}

/// Draw a random walk starting at the origin.
///
/// Returns `None` only if the configured steps are too small to register
/// against the coordinates reached.
pub fn draw_random_walk(cfg: WalkCfg, tok: ReplayToken) -> Option<PolyLine2> {
    let mut rng = tok.to_std_rng();
    let segments = cfg.segments.max(1);
    let lo = cfg.step_min.max(1e-6);
    let hi = cfg.step_max.max(lo);
    let turn = if cfg.max_turn.is_finite() {
        cfg.max_turn.abs()
    } else {
        0.0
    };
    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut cur = Point2::origin();
    let mut pts = Vec::with_capacity(segments + 1);
    pts.push(cur);
    for _ in 0..segments {
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * turn;
        let step = lo + rng.gen::<f64>() * (hi - lo);
        let next = Point2::new(cur.x + step * heading.cos(), cur.y + step * heading.sin());
        // A step far below the coordinate magnitude can round back onto `cur`.
        if next != cur {
            pts.push(next);
            cur = next;
        }
    }
    if pts.len() < 2 {
        pts.push(Point2::new(lo, 0.0));
    }
    PolyLine2::new(pts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let cfg = CloudCfg {
            count: 64,
            shape: CloudShape::Square { half_width: 2.0 },
        };
        let a = draw_point_cloud(cfg, tok);
        let b = draw_point_cloud(cfg, tok);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.x.abs() <= 2.0 && p.y.abs() <= 2.0));
        let c = draw_point_cloud(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn disk_cloud_stays_inside() {
        let pts = draw_point_cloud(CloudCfg::default(), ReplayToken { seed: 1, index: 0 });
        assert_eq!(pts.len(), 1000);
        assert!(pts.iter().all(|p| p.coords.norm() <= 1.0 + 1e-12));
    }

    #[test]
    fn walk_is_a_valid_polyline() {
        let cfg = WalkCfg::default();
        let line = draw_random_walk(cfg, ReplayToken { seed: 3, index: 1 }).expect("walk");
        assert_eq!(line.size(), cfg.segments + 1);
        assert!(line.length() >= cfg.step_min * cfg.segments as f64 - 1e-9);
        let again = PolyLine2::new(line.points().to_vec()).unwrap();
        assert_eq!(again, line);
    }
}
