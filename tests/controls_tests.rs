// Host-side tests for the pure input/status helpers of the web front-end.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod controls {
    include!("../src/controls.rs");
}

use constants::*;
use controls::*;
use particle_core::{GestureInput, ShapeKind};

#[test]
fn digit_keys_select_shapes() {
    assert_eq!(ShapeKind::from_key("1"), Some(ShapeKind::Heart));
    assert_eq!(ShapeKind::from_key("2"), Some(ShapeKind::Flower));
    assert_eq!(ShapeKind::from_key("3"), Some(ShapeKind::Saturn));
    assert_eq!(ShapeKind::from_key("4"), Some(ShapeKind::Fireworks));
    assert_eq!(ShapeKind::from_key("0"), Some(ShapeKind::Scatter));
    assert_eq!(ShapeKind::from_key("5"), None);
    // the fullscreen key is not a shape
    assert!(is_fullscreen_key("f") && ShapeKind::from_key("f").is_none());
}

#[test]
fn fullscreen_key_is_case_insensitive() {
    assert!(is_fullscreen_key("f"));
    assert!(is_fullscreen_key("F"));
    assert!(!is_fullscreen_key("g"));
    assert!(!is_fullscreen_key("Enter"));
}

#[test]
fn status_text_matches_tracking_state() {
    assert_eq!(status_text(true), STATUS_TRACKING);
    assert_eq!(status_text(false), STATUS_SEARCHING);
}

#[test]
fn latch_reports_only_transitions() {
    let mut latch = StatusLatch::default();
    let hand = GestureInput::Hand { scale: 1.5 };

    // first observation always writes the status
    assert_eq!(latch.observe(GestureInput::Lost), Some(STATUS_SEARCHING));
    assert_eq!(latch.observe(GestureInput::Lost), None);
    assert_eq!(latch.observe(hand), Some(STATUS_TRACKING));
    assert_eq!(latch.observe(GestureInput::Hand { scale: 2.0 }), None);
    assert_eq!(latch.observe(GestureInput::Lost), Some(STATUS_SEARCHING));
}

#[test]
fn locate_file_points_at_cdn() {
    assert_eq!(
        locate_file_url("hands.binarypb"),
        "https://cdn.jsdelivr.net/npm/@mediapipe/hands/hands.binarypb"
    );
}

#[test]
fn hands_options_serialize_camel_case() {
    let json = serde_json::to_value(HandsOptions::default()).unwrap();
    assert_eq!(json["maxNumHands"], 1);
    assert_eq!(json["modelComplexity"], 1);
    assert_eq!(json["minDetectionConfidence"], 0.5);
    assert_eq!(json["minTrackingConfidence"], 0.5);
    assert_eq!(json.as_object().map(|o| o.len()), Some(4));
}
