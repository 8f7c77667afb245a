//! Geometric hand-gesture classification.
//!
//! A pure, stateless mapping from one frame of 21 hand landmarks to a
//! discrete gesture type with a confidence score. The classification is a
//! deterministic heuristic over finger extension and curvature, evaluated
//! in a fixed priority order: fist is checked first because "no finger
//! extended" is the least ambiguous signal, and thumbs-up before palm so a
//! nearly open hand with an ambiguous thumb is not misread.

use crate::config::ClassifierConfig;
use crate::landmark::{indices::*, HandFrame};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Discrete hand gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureType {
    /// Index finger extended, others curled
    Pointing,
    /// All four non-thumb fingers curled, thumb tucked
    Fist,
    /// All five fingers extended
    Palm,
    /// Thumb extended, all other fingers curled
    ThumbsUp,
    /// Index and middle fingers extended, ring and pinky curled
    TwoFingers,
    /// No hand detected or pose not recognized; confidence 0 means no hand
    #[default]
    None,
}

/// Classify one landmark frame into a gesture type and a confidence score.
///
/// Malformed frames (fewer than 21 points, non-finite coordinates) return
/// `(GestureType::None, 0.0)` rather than an error.
#[must_use]
pub fn classify(frame: &HandFrame, config: &ClassifierConfig) -> (GestureType, f32) {
    if !frame.is_valid() {
        return (GestureType::None, 0.0);
    }

    let points = &frame.points;

    // A finger is extended when its tip is sufficiently above its PIP
    // joint; smaller y is higher on screen.
    let extended = |tip: usize| points[tip].y - points[pip_of(tip)].y < -config.finger_extended_threshold;

    let index_extended = extended(INDEX_TIP);
    let middle_extended = extended(MIDDLE_TIP);
    let ring_extended = extended(RING_TIP);
    let pinky_extended = extended(PINKY_TIP);

    let thumb_extended = distance(&points[THUMB_TIP], &points[THUMB_MCP]) > config.thumb_mcp_min_distance
        && distance(&points[THUMB_TIP], &points[WRIST]) > config.thumb_wrist_min_distance;

    // Curvature scales confidence only, never the extended/curled decision
    let curvature = |tip: usize| (points[tip].y - points[pip_of(tip)].y).abs();

    let index_curvature = curvature(INDEX_TIP);
    let middle_curvature = curvature(MIDDLE_TIP);
    let ring_curvature = curvature(RING_TIP);
    let pinky_curvature = curvature(PINKY_TIP);
    let mean_curvature = (index_curvature + middle_curvature + ring_curvature + pinky_curvature) / 4.0;

    let all_curled = !index_extended && !middle_extended && !ring_extended && !pinky_extended;

    use crate::constants::{CONFIDENCE_HIGH, CONFIDENCE_LOW, CONFIDENCE_MEDIUM};

    if all_curled && !thumb_extended {
        // Tighter curl, higher confidence
        let confidence = if mean_curvature < config.tight_curl_curvature {
            CONFIDENCE_HIGH
        } else {
            CONFIDENCE_LOW
        };
        return (GestureType::Fist, confidence);
    }

    if thumb_extended && all_curled {
        return (GestureType::ThumbsUp, CONFIDENCE_MEDIUM);
    }

    if index_extended && middle_extended && ring_extended && pinky_extended && thumb_extended {
        let confidence = if mean_curvature > config.straight_curvature {
            CONFIDENCE_HIGH
        } else {
            CONFIDENCE_LOW
        };
        return (GestureType::Palm, confidence);
    }

    if index_extended && !middle_extended && !ring_extended && !pinky_extended {
        let confidence = if index_curvature > config.straight_curvature
            && middle_curvature < config.relaxed_curvature
        {
            CONFIDENCE_HIGH
        } else {
            CONFIDENCE_LOW
        };
        return (GestureType::Pointing, confidence);
    }

    if index_extended && middle_extended && !ring_extended && !pinky_extended {
        let confidence = if index_curvature > config.straight_curvature
            && middle_curvature > config.straight_curvature
        {
            CONFIDENCE_MEDIUM
        } else {
            CONFIDENCE_LOW
        };
        return (GestureType::TwoFingers, confidence);
    }

    (GestureType::None, 0.0)
}

fn distance(a: &Point2<f32>, b: &Point2<f32>) -> f32 {
    (a - b).norm()
}
