//! Helper functions and synthetic hand poses for tests

use gesture_combat::classifier::GestureType;
use gesture_combat::landmark::{indices::*, HandFrame};
use gesture_combat::tracker::GestureSample;
use nalgebra::{Point2, Vector2};

/// A neutral curled hand centered at `x`: every fingertip sits just below
/// its PIP joint and the thumb is tucked near the palm
pub fn curled_hand(x: f32) -> Vec<(f32, f32)> {
    let mut coords = vec![(x, 0.8); 21];
    coords[WRIST] = (x, 0.9);
    coords[THUMB_MCP] = (x - 0.05, 0.8);
    coords[THUMB_TIP] = (x - 0.03, 0.78);
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        coords[pip_of(tip)] = (x, 0.62);
        coords[tip] = (x, 0.65);
    }
    coords
}

/// Straighten a non-thumb finger upward, keeping its x column
pub fn extend_finger(coords: &mut [(f32, f32)], tip: usize) {
    let x = coords[tip].0;
    coords[pip_of(tip)] = (x, 0.55);
    coords[tip] = (x, 0.40);
}

/// Swing the thumb far enough from palm and wrist to count as extended
pub fn extend_thumb(coords: &mut [(f32, f32)]) {
    let x = coords[THUMB_MCP].0;
    coords[THUMB_TIP] = (x - 0.15, 0.70);
}

pub fn fist_frame() -> HandFrame {
    HandFrame::from_coords(&curled_hand(0.5), 0.95)
}

pub fn thumbs_up_frame() -> HandFrame {
    let mut coords = curled_hand(0.5);
    extend_thumb(&mut coords);
    HandFrame::from_coords(&coords, 0.95)
}

pub fn palm_frame() -> HandFrame {
    let mut coords = curled_hand(0.5);
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        extend_finger(&mut coords, tip);
    }
    extend_thumb(&mut coords);
    HandFrame::from_coords(&coords, 0.95)
}

pub fn pointing_frame(x: f32) -> HandFrame {
    let mut coords = curled_hand(x);
    extend_finger(&mut coords, INDEX_TIP);
    HandFrame::from_coords(&coords, 0.95)
}

pub fn two_fingers_frame() -> HandFrame {
    let mut coords = curled_hand(0.5);
    extend_finger(&mut coords, INDEX_TIP);
    extend_finger(&mut coords, MIDDLE_TIP);
    HandFrame::from_coords(&coords, 0.95)
}

/// A stationary sample of the given gesture at the screen center
pub fn sample(gesture: GestureType) -> GestureSample {
    GestureSample {
        gesture,
        position: Point2::new(0.5, 0.5),
        direction: Vector2::zeros(),
        velocity: Vector2::zeros(),
        confidence: 0.9,
    }
}

/// A sample of the given gesture moving at `vx, vy` normalized units/s
pub fn moving_sample(gesture: GestureType, vx: f32, vy: f32) -> GestureSample {
    GestureSample {
        velocity: Vector2::new(vx, vy),
        direction: Vector2::new(vx / 30.0, vy / 30.0),
        ..sample(gesture)
    }
}
