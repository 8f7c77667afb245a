//! Pose tracking across frames.
//!
//! The tracker keeps the last known screen position of the hand (taken
//! from the index-finger tip), derives direction and velocity from frame
//! deltas, and combines the classifier's output with the upstream
//! detector's per-hand confidence into one [`GestureSample`] per frame.
//!
//! Position continuity is never lost: when the combined confidence is too
//! low the gesture type is rejected, but position, direction, and velocity
//! still update.

use crate::classifier::{classify, GestureType};
use crate::config::Config;
use crate::constants::MIN_DELTA_TIME_MS;
use crate::landmark::{indices::INDEX_TIP, HandFrame};
use log::trace;
use nalgebra::{Point2, Vector2};

/// One classified, tracked sample of hand state for a single frame
#[derive(Debug, Clone, Copy)]
pub struct GestureSample {
    /// Classified gesture for this frame
    pub gesture: GestureType,
    /// Normalized position in [0,1]², mirrored horizontally to match a
    /// mirrored camera view
    pub position: Point2<f32>,
    /// Raw positional delta since the previous sample
    pub direction: Vector2<f32>,
    /// Positional delta per second
    pub velocity: Vector2<f32>,
    /// Product of hand-detection confidence and classifier confidence
    pub confidence: f32,
}

impl Default for GestureSample {
    fn default() -> Self {
        Self {
            gesture: GestureType::None,
            position: Point2::new(0.5, 0.5),
            direction: Vector2::zeros(),
            velocity: Vector2::zeros(),
            confidence: 0.0,
        }
    }
}

/// Tracks hand position and velocity across frames and produces one
/// [`GestureSample`] per incoming frame
pub struct PoseTracker {
    config: Config,
    last_sample: GestureSample,
    last_time_ms: Option<f64>,
}

impl PoseTracker {
    /// Create a tracker; the initial position is the screen center
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            last_sample: GestureSample::default(),
            last_time_ms: None,
        }
    }

    /// Process one frame tick.
    ///
    /// `frame` is `None` when no hand was detected this tick; in that case
    /// position, direction, and velocity keep their previous values and
    /// the gesture is forced to `None` with confidence 0.
    pub fn update(&mut self, frame: Option<&HandFrame>, now_ms: f64) -> GestureSample {
        let Some(frame) = frame.filter(|f| f.is_valid()) else {
            self.last_sample.gesture = GestureType::None;
            self.last_sample.confidence = 0.0;
            return self.last_sample;
        };

        // Index-finger tip is the reference landmark; x is mirrored
        let tip = frame.points[INDEX_TIP];
        let position = Point2::new(1.0 - tip.x, tip.y);

        let direction = position - self.last_sample.position;
        let velocity = match self.last_time_ms {
            Some(last) => {
                // Clamp away from zero so clock skew or duplicate
                // timestamps cannot blow up the division
                let dt_seconds = ((now_ms - last).max(MIN_DELTA_TIME_MS)) / 1000.0;
                direction / dt_seconds as f32
            }
            None => Vector2::zeros(),
        };

        let (gesture, classifier_confidence) = classify(frame, &self.config.classifier);
        let combined = frame.hand_confidence * classifier_confidence;

        // Below the acceptance threshold the type is rejected but the
        // motion state still advances
        let gesture = if combined > self.config.stability.min_confidence {
            gesture
        } else {
            GestureType::None
        };

        trace!(
            "sample gesture={gesture:?} confidence={combined:.2} position=({:.3}, {:.3})",
            position.x,
            position.y
        );

        self.last_sample = GestureSample {
            gesture,
            position,
            direction,
            velocity,
            confidence: combined,
        };
        self.last_time_ms = Some(now_ms);
        self.last_sample
    }

    /// Most recent sample produced by [`update`](Self::update)
    #[must_use]
    pub fn last_sample(&self) -> &GestureSample {
        &self.last_sample
    }

    /// Reset the tracker to its initial state
    pub fn reset(&mut self) {
        self.last_sample = GestureSample::default();
        self.last_time_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::indices::*;

    fn pointing_frame(x: f32, y: f32, confidence: f32) -> HandFrame {
        let mut coords = vec![(x, y + 0.3); 21];
        coords[WRIST] = (x, y + 0.4);
        coords[INDEX_PIP] = (x, y + 0.15);
        coords[INDEX_TIP] = (x, y);
        HandFrame::from_coords(&coords, confidence)
    }

    #[test]
    fn test_position_is_mirrored() {
        let mut tracker = PoseTracker::new(Config::default());
        let sample = tracker.update(Some(&pointing_frame(0.2, 0.4, 1.0)), 0.0);
        assert!((sample.position.x - 0.8).abs() < 1e-6);
        assert!((sample.position.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_from_delta() {
        let mut tracker = PoseTracker::new(Config::default());
        tracker.update(Some(&pointing_frame(0.5, 0.5, 1.0)), 0.0);
        let sample = tracker.update(Some(&pointing_frame(0.4, 0.5, 1.0)), 100.0);
        // Mirrored x moved +0.1 over 0.1s
        assert!((sample.direction.x - 0.1).abs() < 1e-5);
        assert!((sample.velocity.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_duplicate_timestamp_is_clamped() {
        let mut tracker = PoseTracker::new(Config::default());
        tracker.update(Some(&pointing_frame(0.5, 0.5, 1.0)), 1000.0);
        let sample = tracker.update(Some(&pointing_frame(0.4, 0.5, 1.0)), 1000.0);
        assert!(sample.velocity.x.is_finite());
        // 0.1 over the minimum 1ms
        assert!((sample.velocity.x - 100.0).abs() < 1e-2);
    }

    #[test]
    fn test_no_hand_keeps_position() {
        let mut tracker = PoseTracker::new(Config::default());
        tracker.update(Some(&pointing_frame(0.3, 0.6, 1.0)), 0.0);
        let sample = tracker.update(None, 33.0);
        assert_eq!(sample.gesture, GestureType::None);
        assert_eq!(sample.confidence, 0.0);
        assert!((sample.position.x - 0.7).abs() < 1e-6);
        assert!((sample.position.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_low_confidence_rejects_type_but_tracks_position() {
        let mut tracker = PoseTracker::new(Config::default());
        tracker.update(Some(&pointing_frame(0.5, 0.5, 1.0)), 0.0);
        // Hand confidence 0.5 * classifier 0.9 = 0.45, at or below the gate
        let sample = tracker.update(Some(&pointing_frame(0.3, 0.5, 0.5)), 33.0);
        assert_eq!(sample.gesture, GestureType::None);
        assert!(sample.confidence > 0.0);
        assert!((sample.position.x - 0.7).abs() < 1e-6);
        assert!(sample.velocity.norm() > 0.0);
    }

    #[test]
    fn test_first_frame_has_zero_velocity() {
        let mut tracker = PoseTracker::new(Config::default());
        let sample = tracker.update(Some(&pointing_frame(0.1, 0.1, 1.0)), 0.0);
        assert_eq!(sample.velocity, Vector2::zeros());
    }
}
