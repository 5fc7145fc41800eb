//! Mouse-driven stand-ins for the camera hand tracker and the page's color picker.

use particle_core::{GestureInput, Landmark, Rgb, INDEX_TIP, THUMB_TIP};

/// Thumb-to-index distance reached with the cursor at the window's right edge.
pub const MAX_PINCH_DISTANCE: f32 = 0.35;

// keypoints per hand reported by the landmark model
const HAND_LANDMARKS: usize = 21;

pub const PALETTE: [Rgb; 5] = [
    Rgb::BASE,
    Rgb::new(0xff, 0x33, 0x66),
    Rgb::new(0xff, 0xd7, 0x00),
    Rgb::new(0x7c, 0xfc, 0x00),
    Rgb::new(0xff, 0xff, 0xff),
];

/// Cursor X across the window mapped onto [0, MAX_PINCH_DISTANCE].
pub fn pinch_distance(cursor_x: f64, width: u32) -> f32 {
    if width == 0 {
        return 0.0;
    }
    let t = (cursor_x / width as f64).clamp(0.0, 1.0) as f32;
    t * MAX_PINCH_DISTANCE
}

/// A hand whose thumb and index tips sit `distance` apart horizontally.
pub fn synthetic_hand(distance: f32) -> Vec<Landmark> {
    let mut hand = vec![Landmark::new(0.5, 0.5, 0.0); HAND_LANDMARKS];
    hand[THUMB_TIP] = Landmark::new(0.5 - distance / 2.0, 0.5, 0.0);
    hand[INDEX_TIP] = Landmark::new(0.5 + distance / 2.0, 0.5, 0.0);
    hand
}

pub fn gesture_for_cursor(cursor_x: f64, width: u32) -> GestureInput {
    let hand = synthetic_hand(pinch_distance(cursor_x, width));
    GestureInput::from_hands(&[hand])
}

/// The palette entry after `current`; colors outside the palette restart it.
pub fn next_color(current: Rgb) -> Rgb {
    match PALETTE.iter().position(|c| *c == current) {
        Some(i) => PALETTE[(i + 1) % PALETTE.len()],
        None => PALETTE[0],
    }
}
