// Integration tests for shape generation.

use particle_core::shapes::{self, saturn_sphere_count};
use particle_core::ShapeKind;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = 15_000;

#[test]
fn every_shape_returns_exactly_n_finite_points() {
    let mut rng = SmallRng::seed_from_u64(42);
    for shape in ShapeKind::ALL {
        for n in [0usize, 1, 7, N] {
            let points = shapes::generate(shape, n, &mut rng);
            assert_eq!(points.len(), n, "{shape} returned wrong count for n={n}");
            assert!(
                points.iter().all(|p| p.is_finite()),
                "{shape} produced a non-finite point"
            );
        }
    }
}

#[test]
fn saturn_is_a_sphere_then_a_ring() {
    let mut rng = SmallRng::seed_from_u64(7);
    let points = shapes::generate(ShapeKind::Saturn, N, &mut rng);
    let split = saturn_sphere_count(N);
    assert_eq!(split, 6_000);

    for p in &points[..split] {
        assert!((p.length() - 6.0).abs() < 1e-3, "sphere point at r={}", p.length());
    }
    for p in &points[split..] {
        let r_xz = (p.x * p.x + p.z * p.z).sqrt();
        assert!(r_xz >= 8.0 - 1e-3 && r_xz <= 14.0 + 1e-3, "ring point at r={r_xz}");
        assert!(p.y.abs() <= 0.25);
    }
}

#[test]
fn fireworks_stay_within_radius() {
    let mut rng = SmallRng::seed_from_u64(11);
    for p in shapes::generate(ShapeKind::Fireworks, N, &mut rng) {
        assert!(p.length() <= 15.0 + 1e-3);
    }
}

#[test]
fn flower_petals_stay_within_radius() {
    let mut rng = SmallRng::seed_from_u64(13);
    for p in shapes::generate(ShapeKind::Flower, N, &mut rng) {
        assert!(p.truncate().length() <= 10.0 + 1e-3);
        assert!(p.z.abs() <= 1.5);
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = shapes::generate(ShapeKind::Heart, 64, &mut SmallRng::seed_from_u64(5));
    let b = shapes::generate(ShapeKind::Heart, 64, &mut SmallRng::seed_from_u64(5));
    assert_eq!(a, b);
    let c = shapes::generate(ShapeKind::Heart, 64, &mut SmallRng::seed_from_u64(6));
    assert_ne!(a, c);
}

#[test]
fn heart_particles_do_not_share_an_angle() {
    let mut rng = SmallRng::seed_from_u64(17);
    let points = shapes::generate(ShapeKind::Heart, 256, &mut rng);
    let first = points[0];
    assert!(points.iter().skip(1).any(|p| (p.x - first.x).abs() > 1e-3));
}
