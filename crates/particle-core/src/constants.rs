// Shared shape/motion/scene tuning constants used by both front-ends.

// Particle set
pub const DEFAULT_PARTICLE_COUNT: usize = 15_000;
pub const VELOCITY_SPREAD: f32 = 0.02; // initial velocities in [-spread/2, spread/2]

// Motion smoothing (fraction of the remaining gap closed per frame)
pub const POSITION_SMOOTHING: f32 = 0.08;
pub const GESTURE_SMOOTHING: f32 = 0.1;

// Idle jitter
pub const JITTER_AMPLITUDE: f64 = 0.01;
pub const JITTER_FREQ_X: f64 = 0.001; // per wall-clock millisecond
pub const JITTER_FREQ_Y: f64 = 0.0012;

// Gesture mapping: pinch distance (normalized image units) -> scale
pub const PINCH_DISTANCE_MIN: f32 = 0.05; // fist
pub const PINCH_DISTANCE_MAX: f32 = 0.30; // open hand
pub const GESTURE_SCALE_MIN: f32 = 0.5;
pub const GESTURE_SCALE_MAX: f32 = 3.0;
pub const GESTURE_CLAMP_MIN: f32 = 0.3;
pub const GESTURE_CLAMP_MAX: f32 = 4.0;
pub const GESTURE_IDLE_SCALE: f32 = 1.0;

// Hand landmark indices
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

// Shapes
pub const HEART_SCALE: f32 = 0.6;
pub const HEART_DEPTH: f32 = 5.0;
pub const FLOWER_RADIUS: f32 = 10.0;
pub const FLOWER_PETALS: f32 = 5.0;
pub const FLOWER_DEPTH: f32 = 3.0;
pub const SATURN_SPHERE_FRACTION: f64 = 0.4;
pub const SATURN_SPHERE_RADIUS: f32 = 6.0;
pub const SATURN_RING_INNER: f32 = 8.0;
pub const SATURN_RING_OUTER: f32 = 14.0;
pub const SATURN_RING_THICKNESS: f32 = 0.5;
pub const FIREWORKS_RADIUS: f32 = 15.0;
pub const SCATTER_EXTENT: f32 = 20.0; // cube edge length

// Camera
pub const CAMERA_Z: f32 = 25.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Idle spin (radians per frame)
pub const SPIN_X_PER_FRAME: f32 = 0.001;
pub const SPIN_Y_PER_FRAME: f32 = 0.002;

// Point material
pub const POINT_SIZE: f32 = 0.12;
pub const POINT_OPACITY: f32 = 0.8;
pub const BASE_COLOR_HEX: &str = "#00f2ff";
pub const BACKGROUND_HEX: &str = "#050505";
