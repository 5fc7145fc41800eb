//! Parametric point-cloud shapes.
//!
//! Every particle samples its own parameters, so two calls with the same
//! shape agree in distribution only. Pass a seeded RNG for reproducible output.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Heart,
    Flower,
    Saturn,
    Fireworks,
    /// Uniform cube; also what unknown identifiers resolve to.
    Scatter,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Fireworks,
        ShapeKind::Scatter,
    ];

    /// Resolve a textual identifier (as used by the UI's `data-model`).
    /// Anything unrecognized falls through to [`ShapeKind::Scatter`].
    pub fn from_id(id: &str) -> ShapeKind {
        match id.trim() {
            "heart" => ShapeKind::Heart,
            "flower" => ShapeKind::Flower,
            "saturn" => ShapeKind::Saturn,
            "fireworks" => ShapeKind::Fireworks,
            _ => ShapeKind::Scatter,
        }
    }

    /// Digit shortcut shared by the front-ends: `1`-`4` in menu order, `0`
    /// for the scatter cube.
    pub fn from_key(key: &str) -> Option<ShapeKind> {
        match key {
            "1" => Some(ShapeKind::Heart),
            "2" => Some(ShapeKind::Flower),
            "3" => Some(ShapeKind::Saturn),
            "4" => Some(ShapeKind::Fireworks),
            "0" => Some(ShapeKind::Scatter),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Fireworks => "fireworks",
            ShapeKind::Scatter => "default",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Number of leading particles that belong to the saturn sphere (index < 40% of N).
#[inline]
pub fn saturn_sphere_count(count: usize) -> usize {
    (count as f64 * SATURN_SPHERE_FRACTION).ceil() as usize
}

/// Generate `count` points for `shape`.
#[must_use]
pub fn generate<R: Rng + ?Sized>(shape: ShapeKind, count: usize, rng: &mut R) -> Vec<Vec3> {
    let mut points = vec![Vec3::ZERO; count];
    fill(shape, &mut points, rng);
    points
}

/// Overwrite every entry of `out` with a point sampled from `shape`.
pub fn fill<R: Rng + ?Sized>(shape: ShapeKind, out: &mut [Vec3], rng: &mut R) {
    let sphere_count = saturn_sphere_count(out.len());
    for (i, p) in out.iter_mut().enumerate() {
        *p = match shape {
            ShapeKind::Heart => heart(rng),
            ShapeKind::Flower => flower(rng),
            ShapeKind::Saturn if i < sphere_count => sphere_shell(rng, SATURN_SPHERE_RADIUS),
            ShapeKind::Saturn => ring(rng),
            ShapeKind::Fireworks => burst(rng),
            ShapeKind::Scatter => scatter(rng),
        };
    }
}

// uniform in [-extent/2, extent/2)
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * extent
}

fn heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let a = rng.gen::<f32>() * TAU;
    let x = 16.0 * a.sin().powi(3);
    let y = 13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos() - (4.0 * a).cos();
    let z = centered(rng, HEART_DEPTH);
    Vec3::new(x * HEART_SCALE, y * HEART_SCALE, z)
}

fn flower<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let r = FLOWER_RADIUS * (FLOWER_PETALS * t).sin() * rng.gen::<f32>().cos();
    Vec3::new(r * t.cos(), r * t.sin(), centered(rng, FLOWER_DEPTH))
}

// Polar angle from acos of a uniform cosine so the poles don't bunch up.
fn sphere_shell<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u = rng.gen::<f32>() * 2.0 - 1.0;
    let phi = rng.gen::<f32>() * TAU;
    let s = (1.0 - u * u).max(0.0).sqrt();
    Vec3::new(radius * s * phi.cos(), radius * s * phi.sin(), radius * u)
}

fn ring<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let dist = SATURN_RING_INNER + rng.gen::<f32>() * (SATURN_RING_OUTER - SATURN_RING_INNER);
    let y = centered(rng, SATURN_RING_THICKNESS);
    Vec3::new(dist * t.cos(), y, dist * t.sin())
}

// Radius is uniform, not volume-uniform: the burst is denser near the center.
fn burst<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * 2.0 - 1.0;
    let phi = rng.gen::<f32>() * TAU;
    let distance = rng.gen::<f32>() * FIREWORKS_RADIUS;
    let theta = u.acos();
    Vec3::new(
        distance * theta.sin() * phi.cos(),
        distance * theta.sin() * phi.sin(),
        distance * theta.cos(),
    )
}

fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        centered(rng, SCATTER_EXTENT),
        centered(rng, SCATTER_EXTENT),
        centered(rng, SCATTER_EXTENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn sphere_count_matches_forty_percent_rule() {
        assert_eq!(saturn_sphere_count(15_000), 6_000);
        assert_eq!(saturn_sphere_count(10), 4);
        // indices 0..=4 satisfy i < 4.4
        assert_eq!(saturn_sphere_count(11), 5);
        assert_eq!(saturn_sphere_count(0), 0);
    }

    #[test]
    fn from_id_round_trips_known_shapes() {
        for shape in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_id(shape.id()), shape);
        }
        assert_eq!(ShapeKind::from_id("galaxy"), ShapeKind::Scatter);
        assert_eq!(ShapeKind::from_id(""), ShapeKind::Scatter);
    }

    #[test]
    fn digit_keys_cover_every_shape() {
        let keyed: Vec<_> = ["1", "2", "3", "4", "0"]
            .iter()
            .filter_map(|k| ShapeKind::from_key(k))
            .collect();
        assert_eq!(keyed, ShapeKind::ALL);
        assert_eq!(ShapeKind::from_key("5"), None);
        assert_eq!(ShapeKind::from_key("h"), None);
        assert_eq!(ShapeKind::from_key("10"), None);
    }

    #[test]
    fn heart_stays_inside_curve_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        for p in generate(ShapeKind::Heart, 2_000, &mut rng) {
            assert!(p.x.abs() <= 16.0 * HEART_SCALE + 1e-4);
            assert!(p.y.abs() <= 21.0 * HEART_SCALE + 1e-4);
            assert!(p.z.abs() <= HEART_DEPTH / 2.0);
        }
    }

    #[test]
    fn scatter_fills_the_cube() {
        let mut rng = SmallRng::seed_from_u64(4);
        let half = SCATTER_EXTENT / 2.0;
        for p in generate(ShapeKind::Scatter, 2_000, &mut rng) {
            assert!(p.abs().max_element() <= half);
        }
    }
}
