//! Gesture stability filtering.
//!
//! A simple consecutive-frame debounce, not a majority filter: a single
//! differing frame immediately resets the streak. A gesture type counts as
//! stable once it has been observed for N consecutive raw frames.

use crate::classifier::GestureType;

/// Result of one stability update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stability {
    /// Whether the current raw type has reached the stability threshold
    pub is_stable: bool,
    /// Current consecutive-frame streak for the raw type
    pub streak: u32,
}

/// Debounces the raw per-frame gesture stream
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    threshold: u32,
    last_gesture: GestureType,
    streak: u32,
}

impl StabilityFilter {
    /// Create a filter requiring `threshold` consecutive identical frames
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            last_gesture: GestureType::None,
            streak: 0,
        }
    }

    /// Feed one raw classification and report its stability.
    ///
    /// The streak increments only on raw type equality, independent of the
    /// threshold; any change resets it to 1.
    pub fn update(&mut self, gesture: GestureType) -> Stability {
        if gesture == self.last_gesture {
            self.streak += 1;
        } else {
            self.last_gesture = gesture;
            self.streak = 1;
        }

        Stability {
            is_stable: self.streak >= self.threshold,
            streak: self.streak,
        }
    }

    /// Last raw gesture the streak refers to
    #[must_use]
    pub fn last_gesture(&self) -> GestureType {
        self.last_gesture
    }

    /// Current streak length
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        self.last_gesture = GestureType::None;
        self.streak = 0;
    }
}
