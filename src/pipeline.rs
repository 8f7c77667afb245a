//! End-to-end gesture input pipeline.
//!
//! Wires the classifier, pose tracker, and action dispatcher together
//! behind one entry point the host's frame loop calls once per camera
//! tick. The pipeline is single-threaded and frame-driven: it never
//! blocks, holds no internal concurrency, and sources time exclusively
//! from the timestamps the caller passes in, so it can be driven with
//! synthetic clocks in tests.

use crate::action::ActionEvent;
use crate::config::Config;
use crate::dispatcher::ActionDispatcher;
use crate::landmark::HandFrame;
use crate::tracker::{GestureSample, PoseTracker};
use crate::Result;
use log::info;

/// The full landmark-to-action pipeline
pub struct GesturePipeline {
    tracker: PoseTracker,
    dispatcher: ActionDispatcher,
    canvas_width: f32,
    canvas_height: f32,
}

impl GesturePipeline {
    /// Create a pipeline for a render surface of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: Config, canvas_width: f32, canvas_height: f32) -> Result<Self> {
        config.validate()?;
        info!("gesture pipeline initialized, surface {canvas_width}x{canvas_height}");

        Ok(Self {
            tracker: PoseTracker::new(config.clone()),
            dispatcher: ActionDispatcher::new(config),
            canvas_width,
            canvas_height,
        })
    }

    /// Process one camera tick.
    ///
    /// `frame` is `None` when no hand was detected. Returns the action
    /// events produced by this tick, in emission order.
    pub fn process_frame(&mut self, frame: Option<&HandFrame>, now_ms: f64) -> Vec<ActionEvent> {
        let sample = self.tracker.update(frame, now_ms);
        self.dispatcher
            .process(&sample, now_ms, self.canvas_width, self.canvas_height);
        self.dispatcher.drain_events()
    }

    /// Most recent tracked sample
    #[must_use]
    pub fn last_sample(&self) -> &GestureSample {
        self.tracker.last_sample()
    }

    /// Dispatcher state, for HUD display (charge/gather progress)
    #[must_use]
    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    /// Update the render-surface dimensions
    pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
    }

    /// Reset all per-attempt state; called between levels
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.dispatcher.reset();
    }
}
