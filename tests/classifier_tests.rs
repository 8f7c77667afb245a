//! Classification properties over synthetic landmark poses

mod test_helpers;

use gesture_combat::classifier::{classify, GestureType};
use gesture_combat::config::ClassifierConfig;
use gesture_combat::landmark::{indices::*, HandFrame};
use test_helpers::*;

fn config() -> ClassifierConfig {
    ClassifierConfig::default()
}

#[test]
fn test_curled_hand_with_tucked_thumb_is_a_fist() {
    let (gesture, confidence) = classify(&fist_frame(), &config());
    assert_eq!(gesture, GestureType::Fist);
    assert!(confidence >= 0.7);
}

#[test]
fn test_loose_fist_still_reads_as_fist_with_lower_confidence() {
    // Spread the curled tips further from their PIP joints so the mean
    // curvature crosses the tight-curl bound
    let mut coords = curled_hand(0.5);
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        coords[tip] = (0.5, 0.74);
    }
    let (gesture, confidence) = classify(&HandFrame::from_coords(&coords, 1.0), &config());
    assert_eq!(gesture, GestureType::Fist);
    assert!((confidence - 0.7).abs() < f32::EPSILON);
}

#[test]
fn test_thumb_out_resolves_to_thumbs_up_not_fist() {
    let (gesture, confidence) = classify(&thumbs_up_frame(), &config());
    assert_eq!(gesture, GestureType::ThumbsUp);
    assert!((confidence - 0.85).abs() < f32::EPSILON);
}

#[test]
fn test_open_hand_is_a_palm() {
    let (gesture, confidence) = classify(&palm_frame(), &config());
    assert_eq!(gesture, GestureType::Palm);
    assert!((confidence - 0.9).abs() < f32::EPSILON);
}

#[test]
fn test_open_hand_with_tucked_thumb_is_not_a_palm() {
    let mut coords = curled_hand(0.5);
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        extend_finger(&mut coords, tip);
    }
    let (gesture, _) = classify(&HandFrame::from_coords(&coords, 1.0), &config());
    assert_ne!(gesture, GestureType::Palm);
}

#[test]
fn test_index_only_is_pointing() {
    let (gesture, confidence) = classify(&pointing_frame(0.5), &config());
    assert_eq!(gesture, GestureType::Pointing);
    assert!((confidence - 0.9).abs() < f32::EPSILON);
}

#[test]
fn test_index_and_middle_is_two_fingers() {
    let (gesture, confidence) = classify(&two_fingers_frame(), &config());
    assert_eq!(gesture, GestureType::TwoFingers);
    assert!((confidence - 0.85).abs() < f32::EPSILON);
}

#[test]
fn test_priority_order_is_fist_first() {
    // A curled hand satisfies no other pattern, but this pins down that
    // the fist check short-circuits before the pointing/two-finger checks
    // even when curvatures are borderline
    let mut coords = curled_hand(0.5);
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        // Tips just barely below the extension threshold
        coords[pip_of(tip)] = (0.5, 0.60);
        coords[tip] = (0.5, 0.56);
    }
    let (gesture, _) = classify(&HandFrame::from_coords(&coords, 1.0), &config());
    assert_eq!(gesture, GestureType::Fist);
}

#[test]
fn test_short_landmark_list_degrades_to_none() {
    let frame = HandFrame::from_coords(&[(0.5, 0.5); 12], 1.0);
    let (gesture, confidence) = classify(&frame, &config());
    assert_eq!(gesture, GestureType::None);
    assert_eq!(confidence, 0.0);
}

#[test]
fn test_non_finite_coordinates_degrade_to_none() {
    let mut coords = curled_hand(0.5);
    coords[INDEX_PIP] = (0.5, f32::INFINITY);
    let (gesture, confidence) = classify(&HandFrame::from_coords(&coords, 1.0), &config());
    assert_eq!(gesture, GestureType::None);
    assert_eq!(confidence, 0.0);
}

#[test]
fn test_classification_is_deterministic() {
    let frame = palm_frame();
    let first = classify(&frame, &config());
    for _ in 0..10 {
        assert_eq!(classify(&frame, &config()), first);
    }
}
