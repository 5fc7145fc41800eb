// Integration tests for the gesture mapper and gesture smoothing.

use glam::Vec2;
use particle_core::*;

fn hand_with_tips(thumb: (f32, f32), index: (f32, f32)) -> Vec<Landmark> {
    let mut hand = vec![Landmark::default(); 21];
    hand[THUMB_TIP] = Landmark::new(thumb.0, thumb.1, 0.0);
    hand[INDEX_TIP] = Landmark::new(index.0, index.1, 0.0);
    hand
}

#[test]
fn distance_maps_onto_scale_range_endpoints() {
    assert_eq!(scale_from_distance(0.05), 0.5);
    assert_eq!(scale_from_distance(0.30), 3.0);
}

#[test]
fn distance_is_clamped_at_both_ends() {
    assert_eq!(scale_from_distance(0.0), 0.3);
    assert_eq!(scale_from_distance(1.0), 4.0);
    assert_eq!(scale_from_distance(-5.0), GESTURE_CLAMP_MIN);
    assert_eq!(scale_from_distance(50.0), GESTURE_CLAMP_MAX);
}

#[test]
fn mapping_is_monotonic_inside_the_range() {
    let mut prev = scale_from_distance(0.05);
    for step in 1..=25 {
        let d = 0.05 + step as f32 * 0.01;
        let s = scale_from_distance(d);
        assert!(s > prev, "scale not increasing at d={d}");
        prev = s;
    }
}

#[test]
fn keypoint_distance_ignores_depth() {
    let mut hand = hand_with_tips((0.4, 0.5), (0.4, 0.8));
    hand[INDEX_TIP].z = 0.9;
    let scale = pinch_scale(&hand).unwrap();
    assert!((scale - 3.0).abs() < 1e-5);
    assert_eq!(
        scale_from_keypoints(Vec2::new(0.4, 0.5), Vec2::new(0.4, 0.8)),
        scale
    );
}

#[test]
fn first_hand_drives_input_and_absence_is_lost() {
    let open = hand_with_tips((0.2, 0.2), (0.2, 0.9));
    let fist = hand_with_tips((0.2, 0.2), (0.2, 0.21));
    match GestureInput::from_hands(&[open, fist]) {
        GestureInput::Hand { scale } => assert_eq!(scale, 4.0),
        other => panic!("expected a hand, got {other:?}"),
    }
    let none: [Vec<Landmark>; 0] = [];
    assert_eq!(GestureInput::from_hands(&none), GestureInput::Lost);
    let partial = vec![Landmark::default(); 5];
    assert_eq!(GestureInput::from_hands(&[partial]), GestureInput::Lost);
}

#[test]
fn input_only_moves_the_target() {
    let mut g = GestureState::default();
    g.apply(GestureInput::Hand { scale: 3.0 });
    assert_eq!(g.target(), 3.0);
    assert_eq!(g.scale(), 1.0);
    assert!(g.is_tracking());

    g.step();
    assert!((g.scale() - 1.2).abs() < 1e-6);

    g.apply(GestureInput::Lost);
    assert_eq!(g.target(), 1.0);
    assert!((g.scale() - 1.2).abs() < 1e-6);
    assert!(!g.is_tracking());
}

#[test]
fn scale_converges_to_target() {
    let mut g = GestureState::default();
    g.apply(GestureInput::Hand { scale: 0.5 });
    let mut prev_gap = (g.scale() - g.target()).abs();
    for _ in 0..100 {
        g.step();
        let gap = (g.scale() - g.target()).abs();
        assert!(gap < prev_gap || gap == 0.0);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-4);
}
