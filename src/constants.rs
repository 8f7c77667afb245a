//! Constants used throughout the library

/// Number of hand landmarks per detected hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Minimum combined confidence for a classification to be accepted.
/// At or below this, the sample is forced to `GestureType::None`.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Consecutive identical raw classifications required before a gesture
/// is considered stable
pub const DEFAULT_STABLE_THRESHOLD: u32 = 2;

/// A non-thumb finger counts as extended when tip.y - pip.y < -threshold
/// (normalized image coordinates, smaller y is higher on screen)
pub const DEFAULT_FINGER_EXTENDED_THRESHOLD: f32 = 0.05;

/// Thumb extension thresholds (the thumb's joint geometry differs from
/// the other four fingers, so it gets distance-based rules)
pub const DEFAULT_THUMB_MCP_MIN_DISTANCE: f32 = 0.08;
pub const DEFAULT_THUMB_WRIST_MIN_DISTANCE: f32 = 0.15;

/// Curvature bounds used to scale classifier confidence
pub const DEFAULT_TIGHT_CURL_CURVATURE: f32 = 0.1;
pub const DEFAULT_STRAIGHT_CURVATURE: f32 = 0.08;
pub const DEFAULT_RELAXED_CURVATURE: f32 = 0.05;

/// Classifier confidence levels
pub const CONFIDENCE_HIGH: f32 = 0.9;
pub const CONFIDENCE_MEDIUM: f32 = 0.85;
pub const CONFIDENCE_LOW: f32 = 0.7;

/// Action cooldowns in milliseconds
pub const DEFAULT_SLASH_COOLDOWN_MS: f64 = 300.0;
pub const DEFAULT_WAVE_COOLDOWN_MS: f64 = 500.0;
pub const DEFAULT_THRUST_COOLDOWN_MS: f64 = 800.0;
pub const DEFAULT_SWORD_RAIN_COOLDOWN_MS: f64 = 1000.0;
pub const DEFAULT_GATHER_COOLDOWN_MS: f64 = 500.0;

/// Hold durations for the two hold-to-trigger gestures, in milliseconds
pub const DEFAULT_GATHER_HOLD_MS: f64 = 3000.0;
pub const DEFAULT_CHARGE_HOLD_MS: f64 = 3000.0;

/// Time to reach a full charge level of 1.0, in milliseconds
pub const DEFAULT_CHARGE_FULL_MS: f64 = 1500.0;

/// Minimum velocity magnitude (normalized units per second) for a
/// pointing motion to register as a slash
pub const DEFAULT_SLASH_SPEED_THRESHOLD: f32 = 1.5;

/// Minimum frame delta time in milliseconds, clamps velocity division
pub const MIN_DELTA_TIME_MS: f64 = 1.0;

/// Pointer input timing thresholds in milliseconds
pub const DEFAULT_DOUBLE_TAP_MS: f64 = 300.0;
pub const DEFAULT_LONG_PRESS_MS: f64 = 200.0;
