// DOM contract and gesture-source settings for the web front-end.

// Page elements
pub const CANVAS_ID: &str = "particle-canvas";
pub const VIDEO_ID: &str = "video-input";
pub const GESTURE_STATUS_SELECTOR: &str = "#gesture-status span";
pub const SHAPE_BUTTON_SELECTOR: &str = ".btn-model";
pub const SHAPE_BUTTON_ATTR: &str = "data-model";
pub const ACTIVE_CLASS: &str = "active";
pub const COLOR_INPUT_ID: &str = "color-input";
pub const COLOR_VALUE_ID: &str = "color-value";
pub const FULLSCREEN_TOGGLE_ID: &str = "fullscreen-toggle";

// Canvas backing store follows CSS size * devicePixelRatio, capped
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// MediaPipe Hands
pub const HANDS_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/hands/";
pub const MAX_NUM_HANDS: u32 = 1;
pub const MODEL_COMPLEXITY: u32 = 1;
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.5;
pub const MIN_TRACKING_CONFIDENCE: f32 = 0.5;

// Camera capture size handed to the MediaPipe camera helper
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;

// Status line
pub const STATUS_TRACKING: &str = "Tracking hand...";
pub const STATUS_SEARCHING: &str = "Searching for hand...";
