//! Pointer input adapter.
//!
//! The game is playable without a camera: pointer (mouse/touch) input maps
//! onto the same action events as the gesture path. A drag moves the
//! sword, a fast drag slashes, a quick tap thrusts at the tap point, a
//! double tap fires a sword wave, and a press held to the charge duration
//! charges and releases on lift, mirroring the fist hold-to-trigger.
//!
//! Coordinates are render-surface pixels; drag speed is normalized against
//! the surface size so the slash threshold matches the gesture path.

use crate::action::{ActionEvent, ActionKind, CooldownTable};
use crate::config::Config;
use crate::constants::MIN_DELTA_TIME_MS;
use crate::dispatcher::HoldTrigger;
use log::debug;
use nalgebra::{Point2, Vector2};

/// Tracks one pointer and translates press/drag/release into actions
pub struct PointerTracker {
    config: Config,
    canvas_width: f32,
    canvas_height: f32,
    cooldowns: CooldownTable,
    charge_hold: HoldTrigger,
    pressed: bool,
    position: Point2<f32>,
    start_position: Point2<f32>,
    start_ms: f64,
    last_move_ms: f64,
    last_tap_ms: Option<f64>,
    events: Vec<ActionEvent>,
}

impl PointerTracker {
    /// Create a tracker for a surface of the given pixel dimensions
    #[must_use]
    pub fn new(config: Config, canvas_width: f32, canvas_height: f32) -> Self {
        let cooldowns = CooldownTable::new(config.cooldowns.clone());
        let charge_hold = HoldTrigger::new(config.dispatcher.charge_hold_ms);
        Self {
            config,
            canvas_width,
            canvas_height,
            cooldowns,
            charge_hold,
            pressed: false,
            position: Point2::origin(),
            start_position: Point2::origin(),
            start_ms: 0.0,
            last_move_ms: 0.0,
            last_tap_ms: None,
            events: Vec::new(),
        }
    }

    /// Update the render-surface dimensions
    pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
    }

    /// Pointer pressed at pixel coordinates
    pub fn press(&mut self, x: f32, y: f32, now_ms: f64) {
        self.pressed = true;
        self.position = Point2::new(x, y);
        self.start_position = self.position;
        self.start_ms = now_ms;
        self.last_move_ms = now_ms;
        self.charge_hold.start(now_ms);
    }

    /// Pointer moved while pressed
    pub fn drag(&mut self, x: f32, y: f32, now_ms: f64) {
        if !self.pressed {
            return;
        }

        let new_position = Point2::new(x, y);
        let delta = new_position - self.position;
        let dt_seconds = ((now_ms - self.last_move_ms).max(MIN_DELTA_TIME_MS)) / 1000.0;
        // Normalized so the speed threshold is surface-size independent
        let velocity = Vector2::new(
            delta.x / self.canvas_width.max(1.0),
            delta.y / self.canvas_height.max(1.0),
        ) / dt_seconds as f32;

        self.events.push(ActionEvent::Move { x, y });

        if self.charge_hold.complete(now_ms) {
            debug!("pointer charge hold complete");
            self.events.push(ActionEvent::Charge);
        }

        let speed = velocity.norm();
        if speed > self.config.dispatcher.slash_speed_threshold
            && self.cooldowns.try_fire(ActionKind::Slash, now_ms)
        {
            debug!("pointer slash at speed {speed:.2}");
            self.events.push(ActionEvent::Slash);
        }

        self.position = new_position;
        self.last_move_ms = now_ms;
    }

    /// Pointer lifted; resolves taps, double taps, and charge releases
    pub fn release(&mut self, now_ms: f64) {
        if !self.pressed {
            return;
        }
        self.pressed = false;

        // A press held to the charge duration without any drag ticks still
        // charges; check once more before resolving the lift
        if self.charge_hold.complete(now_ms) {
            debug!("pointer charge hold complete");
            self.events.push(ActionEvent::Charge);
        }

        let held_ms = now_ms - self.start_ms;

        if self.charge_hold.has_fired() {
            let charge_level = ((held_ms / self.config.dispatcher.charge_full_ms).min(1.0)) as f32;
            debug!("pointer charge released at level {charge_level:.2}");
            self.events.push(ActionEvent::Release { charge_level });
        } else if held_ms < self.config.pointer.long_press_ms {
            let is_double_tap = self
                .last_tap_ms
                .is_some_and(|last| now_ms - last < self.config.pointer.double_tap_ms);

            if is_double_tap {
                if self.cooldowns.try_fire(ActionKind::Wave, now_ms) {
                    debug!("pointer wave");
                    self.events.push(ActionEvent::Wave);
                }
            } else if self.cooldowns.try_fire(ActionKind::Thrust, now_ms) {
                debug!("pointer thrust");
                self.events.push(ActionEvent::Thrust {
                    x: self.position.x,
                    y: self.position.y,
                });
            }
        }

        self.last_tap_ms = Some(now_ms);
        self.charge_hold.clear();
    }

    /// Whether the pointer is currently pressed
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Current pointer position in pixels
    #[must_use]
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// Position where the current press started, in pixels
    #[must_use]
    pub fn start_position(&self) -> Point2<f32> {
        self.start_position
    }

    /// Take all events queued since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset all pointer state
    pub fn reset(&mut self) {
        self.pressed = false;
        self.position = Point2::origin();
        self.start_position = Point2::origin();
        self.start_ms = 0.0;
        self.last_move_ms = 0.0;
        self.last_tap_ms = None;
        self.charge_hold.clear();
        self.cooldowns.reset();
        self.events.clear();
    }
}
