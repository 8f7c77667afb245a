//! Hand landmark frame types and index constants.
//!
//! Landmarks follow the MediaPipe hand landmark convention: 21 normalized
//! points per hand, origin at the top-left of the image, coordinates in
//! `[0, 1]`. A frame is ephemeral and exists only for one classification
//! call.

use crate::constants::NUM_HAND_LANDMARKS;
use crate::error::{Error, Result};
use nalgebra::Point2;

/// Hand landmark indices (MediaPipe hand landmark model convention)
pub mod indices {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;

    /// PIP joint of a non-thumb finger, given its tip index
    #[must_use]
    pub const fn pip_of(tip: usize) -> usize {
        tip - 2
    }
}

/// One frame of hand landmarks plus the detector's per-hand confidence
#[derive(Debug, Clone)]
pub struct HandFrame {
    /// Ordered landmark points, 21 expected
    pub points: Vec<Point2<f32>>,
    /// Hand-detection confidence in [0, 1]
    pub hand_confidence: f32,
}

impl HandFrame {
    /// Create a frame from landmark points and a detection confidence
    #[must_use]
    pub fn new(points: Vec<Point2<f32>>, hand_confidence: f32) -> Self {
        Self {
            points,
            hand_confidence,
        }
    }

    /// Build a frame from `(x, y)` tuples, as delivered by the upstream
    /// landmark model
    #[must_use]
    pub fn from_coords(coords: &[(f32, f32)], hand_confidence: f32) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
            hand_confidence,
        }
    }

    /// Build a frame from `(x, y)` tuples, rejecting malformed input.
    ///
    /// For hosts that want to surface detector faults instead of the
    /// silent degradation [`from_coords`](Self::from_coords) feeds into.
    pub fn try_from_coords(coords: &[(f32, f32)], hand_confidence: f32) -> Result<Self> {
        let frame = Self::from_coords(coords, hand_confidence);
        if frame.points.len() < NUM_HAND_LANDMARKS {
            return Err(Error::InvalidInput(format!(
                "expected {NUM_HAND_LANDMARKS} landmarks, got {}",
                frame.points.len()
            )));
        }
        if !frame.is_valid() {
            return Err(Error::InvalidInput(
                "landmark frame contains non-finite values".to_string(),
            ));
        }
        Ok(frame)
    }

    /// Whether the frame carries a full, finite landmark set.
    ///
    /// Malformed frames never produce an error downstream; they classify
    /// as `GestureType::None` with confidence 0.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= NUM_HAND_LANDMARKS
            && self.hand_confidence.is_finite()
            && self
                .points
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Landmark point at `index`, if present
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point2<f32>> {
        self.points.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_of_tip() {
        assert_eq!(indices::pip_of(indices::INDEX_TIP), indices::INDEX_PIP);
        assert_eq!(indices::pip_of(indices::MIDDLE_TIP), indices::MIDDLE_PIP);
        assert_eq!(indices::pip_of(indices::RING_TIP), indices::RING_PIP);
        assert_eq!(indices::pip_of(indices::PINKY_TIP), indices::PINKY_PIP);
    }

    #[test]
    fn test_short_frame_is_invalid() {
        let frame = HandFrame::from_coords(&[(0.5, 0.5); 10], 0.9);
        assert!(!frame.is_valid());
    }

    #[test]
    fn test_non_finite_frame_is_invalid() {
        let mut coords = [(0.5, 0.5); 21];
        coords[3] = (f32::NAN, 0.2);
        let frame = HandFrame::from_coords(&coords, 0.9);
        assert!(!frame.is_valid());
    }

    #[test]
    fn test_full_frame_is_valid() {
        let frame = HandFrame::from_coords(&[(0.5, 0.5); 21], 0.9);
        assert!(frame.is_valid());
    }

    #[test]
    fn test_try_from_coords_rejects_short_frame() {
        let err = HandFrame::try_from_coords(&[(0.5, 0.5); 10], 0.9).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_try_from_coords_rejects_non_finite_values() {
        let mut coords = [(0.5, 0.5); 21];
        coords[7] = (0.3, f32::INFINITY);
        assert!(HandFrame::try_from_coords(&coords, 0.9).is_err());
    }

    #[test]
    fn test_try_from_coords_accepts_full_frame() {
        let frame = HandFrame::try_from_coords(&[(0.5, 0.5); 21], 0.9).unwrap();
        assert!(frame.is_valid());
    }
}
