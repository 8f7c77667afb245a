//! Gesture combat input engine.
//!
//! This library turns a noisy per-frame stream of hand-landmark samples
//! into a stable sequence of discrete game actions (move, slash, charge,
//! release, gather, sword rain, wave, thrust). The pipeline is:
//!
//! 1. A geometric classifier maps 21 hand landmarks to a gesture type
//!    with a confidence score
//! 2. A pose tracker derives position, direction, and velocity from the
//!    index-finger tip across frames
//! 3. A stability filter debounces single-frame misclassifications
//! 4. An action dispatcher tracks hold timers, per-action cooldowns, and
//!    gesture edges, and queues at most one action event per triggering
//!    condition per frame
//!
//! Camera acquisition and the landmark model itself are external: the
//! host feeds 21 normalized points plus a per-hand detection confidence
//! per tick, along with a monotonic millisecond timestamp. All time is
//! injected, so the whole engine is deterministic under test.
//!
//! # Examples
//!
//! ## Driving the pipeline with landmark frames
//!
//! ```
//! use gesture_combat::config::Config;
//! use gesture_combat::landmark::HandFrame;
//! use gesture_combat::pipeline::GesturePipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = GesturePipeline::new(Config::default(), 800.0, 600.0)?;
//!
//! // One camera tick: no hand detected
//! let events = pipeline.process_frame(None, 0.0);
//! assert!(events.is_empty());
//!
//! // One camera tick with a (here, degenerate) landmark frame
//! let frame = HandFrame::from_coords(&[(0.5, 0.5); 21], 0.9);
//! for event in pipeline.process_frame(Some(&frame), 33.0) {
//!     println!("action: {event:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving the dispatcher directly with synthetic samples
//!
//! ```
//! use gesture_combat::action::ActionEvent;
//! use gesture_combat::classifier::GestureType;
//! use gesture_combat::config::Config;
//! use gesture_combat::dispatcher::ActionDispatcher;
//! use gesture_combat::tracker::GestureSample;
//!
//! let mut dispatcher = ActionDispatcher::new(Config::default());
//!
//! let fist = GestureSample {
//!     gesture: GestureType::Fist,
//!     confidence: 0.9,
//!     ..GestureSample::default()
//! };
//!
//! // Hold a fist for 3 seconds of frames: the charge fires exactly once
//! let mut now = 0.0;
//! let mut charges = 0;
//! while now <= 3500.0 {
//!     dispatcher.process(&fist, now, 800.0, 600.0);
//!     charges += dispatcher
//!         .drain_events()
//!         .iter()
//!         .filter(|e| **e == ActionEvent::Charge)
//!         .count();
//!     now += 33.0;
//! }
//! assert_eq!(charges, 1);
//! ```
//!
//! ## Pointer input
//!
//! ```
//! use gesture_combat::action::ActionEvent;
//! use gesture_combat::config::Config;
//! use gesture_combat::pointer::PointerTracker;
//!
//! let mut pointer = PointerTracker::new(Config::default(), 800.0, 600.0);
//! pointer.press(100.0, 100.0, 0.0);
//! pointer.release(50.0);
//! assert_eq!(
//!     pointer.drain_events(),
//!     vec![ActionEvent::Thrust { x: 100.0, y: 100.0 }]
//! );
//! ```

/// Action events and cooldown bookkeeping
pub mod action;

/// Geometric hand-gesture classification
pub mod classifier;

/// Configuration management
pub mod config;

/// Constants used throughout the library
pub mod constants;

/// The action-dispatch state machine
pub mod dispatcher;

/// Error types and result handling
pub mod error;

/// Hand landmark frame types and index constants
pub mod landmark;

/// End-to-end gesture input pipeline
pub mod pipeline;

/// Pointer input adapter
pub mod pointer;

/// Gesture stability filtering
pub mod stability;

/// Pose tracking across frames
pub mod tracker;

pub use error::{Error, Result};
