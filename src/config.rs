//! Configuration management for the gesture combat input engine

use crate::constants::*;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture classifier thresholds
    pub classifier: ClassifierConfig,

    /// Stability and confidence gating
    pub stability: StabilityConfig,

    /// Action dispatcher timing
    pub dispatcher: DispatcherConfig,

    /// Per-action cooldowns
    pub cooldowns: CooldownConfig,

    /// Pointer input timing
    pub pointer: PointerConfig,
}

/// Gesture classifier thresholds.
///
/// The defaults are empirically tuned against the upstream landmark
/// detector's noise characteristics; they are configuration, not
/// constants, because a different detector may want different values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// A non-thumb finger is extended when tip.y - pip.y < -threshold
    pub finger_extended_threshold: f32,

    /// Minimum thumb tip to MCP joint distance for an extended thumb
    pub thumb_mcp_min_distance: f32,

    /// Minimum thumb tip to wrist distance for an extended thumb
    pub thumb_wrist_min_distance: f32,

    /// Mean curvature below which a fist reads as tightly curled
    pub tight_curl_curvature: f32,

    /// Curvature above which a finger reads as fully straight
    pub straight_curvature: f32,

    /// Curvature below which a curled finger reads as fully relaxed
    pub relaxed_curvature: f32,
}

/// Stability filtering and confidence gating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityConfig {
    /// Consecutive identical frames required before a gesture is stable
    pub stable_threshold: u32,

    /// Combined confidence at or below which a sample's gesture type is
    /// rejected (position tracking continues regardless)
    pub min_confidence: f32,
}

/// Action dispatcher timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Two-fingers hold required to trigger a gather, milliseconds
    pub gather_hold_ms: f64,

    /// Fist hold required to trigger a charge, milliseconds
    pub charge_hold_ms: f64,

    /// Time to reach full charge level, milliseconds
    pub charge_full_ms: f64,

    /// Minimum pointing speed (normalized units per second) for a slash
    pub slash_speed_threshold: f32,
}

/// Per-action cooldown durations, milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooldownConfig {
    pub slash_ms: f64,
    pub wave_ms: f64,
    pub thrust_ms: f64,
    pub sword_rain_ms: f64,
    pub gather_ms: f64,
}

/// Pointer input timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerConfig {
    /// Maximum gap between taps for a double tap, milliseconds
    pub double_tap_ms: f64,

    /// Press duration beyond which a press is a long press, milliseconds
    pub long_press_ms: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            finger_extended_threshold: DEFAULT_FINGER_EXTENDED_THRESHOLD,
            thumb_mcp_min_distance: DEFAULT_THUMB_MCP_MIN_DISTANCE,
            thumb_wrist_min_distance: DEFAULT_THUMB_WRIST_MIN_DISTANCE,
            tight_curl_curvature: DEFAULT_TIGHT_CURL_CURVATURE,
            straight_curvature: DEFAULT_STRAIGHT_CURVATURE,
            relaxed_curvature: DEFAULT_RELAXED_CURVATURE,
        }
    }
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            stable_threshold: DEFAULT_STABLE_THRESHOLD,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            gather_hold_ms: DEFAULT_GATHER_HOLD_MS,
            charge_hold_ms: DEFAULT_CHARGE_HOLD_MS,
            charge_full_ms: DEFAULT_CHARGE_FULL_MS,
            slash_speed_threshold: DEFAULT_SLASH_SPEED_THRESHOLD,
        }
    }
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            slash_ms: DEFAULT_SLASH_COOLDOWN_MS,
            wave_ms: DEFAULT_WAVE_COOLDOWN_MS,
            thrust_ms: DEFAULT_THRUST_COOLDOWN_MS,
            sword_rain_ms: DEFAULT_SWORD_RAIN_COOLDOWN_MS,
            gather_ms: DEFAULT_GATHER_COOLDOWN_MS,
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            double_tap_ms: DEFAULT_DOUBLE_TAP_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.stability.min_confidence) {
            return Err(Error::ConfigError(
                "Minimum confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.stability.stable_threshold == 0 {
            return Err(Error::ConfigError(
                "Stability threshold must be greater than 0".to_string(),
            ));
        }

        if self.classifier.finger_extended_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Finger extension threshold must be greater than 0".to_string(),
            ));
        }
        if self.classifier.thumb_mcp_min_distance <= 0.0 || self.classifier.thumb_wrist_min_distance <= 0.0 {
            return Err(Error::ConfigError(
                "Thumb distance thresholds must be greater than 0".to_string(),
            ));
        }

        if self.dispatcher.gather_hold_ms <= 0.0 || self.dispatcher.charge_hold_ms <= 0.0 {
            return Err(Error::ConfigError(
                "Hold durations must be greater than 0".to_string(),
            ));
        }
        if self.dispatcher.charge_full_ms <= 0.0 {
            return Err(Error::ConfigError(
                "Full charge time must be greater than 0".to_string(),
            ));
        }
        if self.dispatcher.slash_speed_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Slash speed threshold must be greater than 0".to_string(),
            ));
        }

        for (name, value) in [
            ("slash", self.cooldowns.slash_ms),
            ("wave", self.cooldowns.wave_ms),
            ("thrust", self.cooldowns.thrust_ms),
            ("sword rain", self.cooldowns.sword_rain_ms),
            ("gather", self.cooldowns.gather_ms),
        ] {
            if value < 0.0 {
                return Err(Error::ConfigError(format!("{name} cooldown must not be negative")));
            }
        }

        if self.pointer.double_tap_ms <= 0.0 || self.pointer.long_press_ms <= 0.0 {
            return Err(Error::ConfigError(
                "Pointer timing thresholds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Combat Input Configuration

# Gesture classifier thresholds
classifier:
  finger_extended_threshold: 0.05
  thumb_mcp_min_distance: 0.08
  thumb_wrist_min_distance: 0.15
  tight_curl_curvature: 0.1
  straight_curvature: 0.08
  relaxed_curvature: 0.05

# Stability and confidence gating
stability:
  stable_threshold: 2
  min_confidence: 0.5

# Action dispatcher timing (milliseconds)
dispatcher:
  gather_hold_ms: 3000.0
  charge_hold_ms: 3000.0
  charge_full_ms: 1500.0
  slash_speed_threshold: 1.5

# Per-action cooldowns (milliseconds)
cooldowns:
  slash_ms: 300.0
  wave_ms: 500.0
  thrust_ms: 800.0
  sword_rain_ms: 1000.0
  gather_ms: 500.0

# Pointer input timing (milliseconds)
pointer:
  double_tap_ms: 300.0
  long_press_ms: 200.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.stability.stable_threshold, 2);
        assert!((config.cooldowns.slash_ms - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_confidence_rejected() {
        let mut config = Config::default();
        config.stability.min_confidence = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_stability_threshold_rejected() {
        let mut config = Config::default();
        config.stability.stable_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.dispatcher.gather_hold_ms = 2500.0;
        config.stability.min_confidence = 0.6;

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert!((parsed.dispatcher.gather_hold_ms - 2500.0).abs() < f64::EPSILON);
        assert!((parsed.stability.min_confidence - 0.6).abs() < f32::EPSILON);
    }
}
