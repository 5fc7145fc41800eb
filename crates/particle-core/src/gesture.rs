//! Hand keypoints to a smoothed uniform scale.

use crate::constants::*;
use glam::Vec2;

/// One normalized hand keypoint as delivered by the landmark model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// What a gesture source reports for one inferred frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureInput {
    Hand { scale: f32 },
    Lost,
}

impl GestureInput {
    /// Interpret one frame of detected hands. Only the first hand counts.
    pub fn from_hands<H: AsRef<[Landmark]>>(hands: &[H]) -> GestureInput {
        hands
            .first()
            .and_then(|hand| pinch_scale(hand.as_ref()))
            .map_or(GestureInput::Lost, |scale| GestureInput::Hand { scale })
    }

    /// Scale this input asks the cloud to settle at.
    #[inline]
    pub fn target_scale(self) -> f32 {
        match self {
            GestureInput::Hand { scale } => scale,
            GestureInput::Lost => GESTURE_IDLE_SCALE,
        }
    }

    #[inline]
    pub fn is_hand(self) -> bool {
        matches!(self, GestureInput::Hand { .. })
    }
}

/// Map a thumb-to-index distance onto the clamped scale range.
#[inline]
pub fn scale_from_distance(distance: f32) -> f32 {
    let t = (distance - PINCH_DISTANCE_MIN) / (PINCH_DISTANCE_MAX - PINCH_DISTANCE_MIN);
    let scale = t * (GESTURE_SCALE_MAX - GESTURE_SCALE_MIN) + GESTURE_SCALE_MIN;
    scale.clamp(GESTURE_CLAMP_MIN, GESTURE_CLAMP_MAX)
}

#[inline]
pub fn scale_from_keypoints(thumb_tip: Vec2, index_tip: Vec2) -> f32 {
    scale_from_distance(thumb_tip.distance(index_tip))
}

/// Scale for a full landmark set, or `None` if the tips are missing.
pub fn pinch_scale(landmarks: &[Landmark]) -> Option<f32> {
    let thumb = landmarks.get(THUMB_TIP)?;
    let index = landmarks.get(INDEX_TIP)?;
    Some(scale_from_keypoints(thumb.xy(), index.xy()))
}

/// Current/target gesture scale pair.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureState {
    scale: f32,
    target: f32,
    rate: f32,
    tracking: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new(GESTURE_SMOOTHING)
    }
}

impl GestureState {
    pub fn new(rate: f32) -> Self {
        Self {
            scale: GESTURE_IDLE_SCALE,
            target: GESTURE_IDLE_SCALE,
            rate,
            tracking: false,
        }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Record new input. Only the target moves; [`GestureState::step`] chases it.
    pub fn apply(&mut self, input: GestureInput) {
        let tracking = input.is_hand();
        if tracking != self.tracking {
            if tracking {
                log::debug!("[gesture] hand acquired");
            } else {
                log::debug!("[gesture] hand lost, target reset to idle");
            }
            self.tracking = tracking;
        }
        self.target = input.target_scale();
    }

    /// One frame of exponential smoothing toward the target.
    #[inline]
    pub fn step(&mut self) -> f32 {
        self.scale += (self.target - self.scale) * self.rate;
        self.scale
    }
}
