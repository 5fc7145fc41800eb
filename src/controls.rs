// Pure input mapping shared by the DOM handlers; no web-sys here so the
// host-side tests can include it directly.
use particle_core::GestureInput;
use serde::Serialize;

use crate::constants::*;

#[inline]
pub fn is_fullscreen_key(key: &str) -> bool {
    matches!(key, "f" | "F")
}

#[inline]
pub fn status_text(tracking: bool) -> &'static str {
    if tracking {
        STATUS_TRACKING
    } else {
        STATUS_SEARCHING
    }
}

/// Where MediaPipe should fetch one of its model/wasm files from.
pub fn locate_file_url(file: &str) -> String {
    format!("{HANDS_CDN_BASE}{file}")
}

/// Options object passed to `Hands.setOptions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandsOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for HandsOptions {
    fn default() -> Self {
        Self {
            max_num_hands: MAX_NUM_HANDS,
            model_complexity: MODEL_COMPLEXITY,
            min_detection_confidence: MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: MIN_TRACKING_CONFIDENCE,
        }
    }
}

/// Tracks whether the status line needs rewriting: returns the new text only
/// when a result flips between "hand" and "no hand".
#[derive(Default, Clone, Copy)]
pub struct StatusLatch {
    tracking: Option<bool>,
}

impl StatusLatch {
    pub fn observe(&mut self, input: GestureInput) -> Option<&'static str> {
        let tracking = input.is_hand();
        if self.tracking == Some(tracking) {
            return None;
        }
        self.tracking = Some(tracking);
        Some(status_text(tracking))
    }
}
