//! The action-dispatch state machine.
//!
//! Consumes one classified [`GestureSample`] per frame tick, plus an
//! explicit timestamp, and appends high-level [`ActionEvent`]s to a queue
//! the host drains each tick. The machine separates edge-triggered logic
//! (runs once per gesture transition) from level-triggered logic (runs
//! every frame while a condition holds, rate-limited by cooldowns): this
//! is what lets one sustained gesture both start a hold timer on its first
//! frame and be checked for hold completion on every later frame without
//! double-firing.
//!
//! Event order within one call is fixed: move, transition actions
//! (sword rain / release), hold completions (gather / charge), slash.

use crate::action::{ActionEvent, ActionKind, CooldownTable};
use crate::classifier::GestureType;
use crate::config::Config;
use crate::stability::StabilityFilter;
use crate::tracker::GestureSample;
use log::debug;

/// A hold-to-trigger sub-state-machine: a gesture sustained continuously
/// for a minimum duration fires its action exactly once per hold session.
///
/// Instantiated twice, for the gather hold (two fingers) and the charge
/// hold (fist).
#[derive(Debug, Clone)]
pub struct HoldTrigger {
    hold_ms: f64,
    started_at_ms: Option<f64>,
    fired: bool,
}

impl HoldTrigger {
    /// Create a trigger requiring `hold_ms` of continuous hold
    #[must_use]
    pub fn new(hold_ms: f64) -> Self {
        Self {
            hold_ms,
            started_at_ms: None,
            fired: false,
        }
    }

    /// Begin a new hold session, clearing the fired latch
    pub fn start(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
        self.fired = false;
    }

    /// End the session and clear the latch
    pub fn clear(&mut self) {
        self.started_at_ms = None;
        self.fired = false;
    }

    /// Returns `true` exactly once per session, on the first call after
    /// the hold duration has elapsed
    pub fn complete(&mut self, now_ms: f64) -> bool {
        match self.started_at_ms {
            Some(start) if !self.fired && now_ms - start >= self.hold_ms => {
                self.fired = true;
                true
            }
            _ => false,
        }
    }

    /// Whether this session's action has already fired
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Session start timestamp, if a hold is in progress
    #[must_use]
    pub fn started_at_ms(&self) -> Option<f64> {
        self.started_at_ms
    }

    /// Hold progress in [0, 1], 0 when no session is active
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f32 {
        match self.started_at_ms {
            Some(start) if self.hold_ms > 0.0 => (((now_ms - start) / self.hold_ms).clamp(0.0, 1.0)) as f32,
            _ => 0.0,
        }
    }
}

/// The long-lived dispatcher state machine.
///
/// Created once per game session, mutated on every frame tick, and reset
/// explicitly between levels or attempts. Single-threaded by design: every
/// call runs to completion synchronously and events are queued FIFO.
pub struct ActionDispatcher {
    config: Config,
    stability: StabilityFilter,
    cooldowns: CooldownTable,
    gather_hold: HoldTrigger,
    charge_hold: HoldTrigger,
    last_gesture: GestureType,
    charging: bool,
    gathering: bool,
    current_action: Option<ActionKind>,
    events: Vec<ActionEvent>,
}

impl ActionDispatcher {
    /// Create a dispatcher from configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let stability = StabilityFilter::new(config.stability.stable_threshold);
        let cooldowns = CooldownTable::new(config.cooldowns.clone());
        let gather_hold = HoldTrigger::new(config.dispatcher.gather_hold_ms);
        let charge_hold = HoldTrigger::new(config.dispatcher.charge_hold_ms);
        Self {
            config,
            stability,
            cooldowns,
            gather_hold,
            charge_hold,
            last_gesture: GestureType::None,
            charging: false,
            gathering: false,
            current_action: None,
            events: Vec::new(),
        }
    }

    /// Process one frame's sample against the given wall-clock timestamp
    /// and render-surface dimensions, queueing any resulting actions.
    pub fn process(&mut self, sample: &GestureSample, now_ms: f64, canvas_width: f32, canvas_height: f32) {
        let gesture = sample.gesture;
        let stability = self.stability.update(gesture);
        let changed = gesture != self.last_gesture;

        // Continuous movement is never debounced; control must feel
        // immediate even before the gesture stream settles
        if matches!(
            gesture,
            GestureType::Pointing | GestureType::Palm | GestureType::TwoFingers
        ) {
            self.events.push(ActionEvent::Move {
                x: sample.position.x * canvas_width,
                y: sample.position.y * canvas_height,
            });
        }

        if changed {
            self.on_transition(gesture, now_ms);
        }

        // Hold-completion checks are level-triggered: they run every frame
        // the gesture persists, each firing at most once per hold session
        if gesture == GestureType::TwoFingers && self.gather_hold.complete(now_ms) {
            debug!("gather hold complete");
            self.gathering = true;
            self.events.push(ActionEvent::Gather);
            self.current_action = Some(ActionKind::Gather);
        }
        if gesture == GestureType::Fist && self.charge_hold.complete(now_ms) {
            debug!("charge hold complete");
            self.charging = true;
            self.events.push(ActionEvent::Charge);
            self.current_action = Some(ActionKind::Charge);
        }

        // Repetition is gated on stability; initiation (a changed gesture)
        // is evaluated immediately
        if changed || stability.is_stable {
            if gesture == GestureType::Pointing {
                let speed = sample.velocity.norm();
                if speed > self.config.dispatcher.slash_speed_threshold
                    && self.cooldowns.try_fire(ActionKind::Slash, now_ms)
                {
                    debug!("slash at speed {speed:.2}");
                    self.events.push(ActionEvent::Slash);
                    self.current_action = Some(ActionKind::Slash);
                }
            }
        }

        self.last_gesture = gesture;
    }

    /// Edge-triggered transition handling, runs once per gesture change
    fn on_transition(&mut self, gesture: GestureType, now_ms: f64) {
        debug!("gesture transition {:?} -> {gesture:?}", self.last_gesture);

        // Leaving two-fingers with the gather latch set releases the
        // gathered swords; a cooldown miss discards the session silently.
        // Either way the gather session is over.
        if self.last_gesture == GestureType::TwoFingers {
            if self.gather_hold.has_fired() && self.cooldowns.try_fire(ActionKind::SwordRain, now_ms) {
                debug!("sword rain released");
                self.events.push(ActionEvent::SwordRain);
                self.current_action = Some(ActionKind::SwordRain);
            }
            self.gathering = false;
            self.gather_hold.clear();
        }

        // A direct fist -> palm transition with the charge latch set
        // releases the charge; any other exit abandons the session
        if self.last_gesture == GestureType::Fist {
            if gesture == GestureType::Palm && self.charge_hold.has_fired() {
                let held = now_ms - self.charge_hold.started_at_ms().unwrap_or(now_ms);
                let charge_level = ((held / self.config.dispatcher.charge_full_ms).min(1.0)) as f32;
                debug!("charge released at level {charge_level:.2}");
                self.events.push(ActionEvent::Release { charge_level });
                self.current_action = Some(ActionKind::Release);
            }
            self.charging = false;
            self.charge_hold.clear();
        }

        match gesture {
            GestureType::TwoFingers => self.gather_hold.start(now_ms),
            GestureType::Fist => self.charge_hold.start(now_ms),
            _ => {}
        }
    }

    /// Take all events queued since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether a charge hold has completed and not yet been released
    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Whether a gather hold has completed and not yet been released
    #[must_use]
    pub fn is_gathering(&self) -> bool {
        self.gathering
    }

    /// Progress of the active charge hold in [0, 1]
    #[must_use]
    pub fn charge_progress(&self, now_ms: f64) -> f32 {
        self.charge_hold.progress(now_ms)
    }

    /// Progress of the active gather hold in [0, 1]
    #[must_use]
    pub fn gather_progress(&self, now_ms: f64) -> f32 {
        self.gather_hold.progress(now_ms)
    }

    /// Kind of the most recently fired action, if any
    #[must_use]
    pub fn current_action(&self) -> Option<ActionKind> {
        self.current_action
    }

    /// Reset all state between levels or attempts; the dispatcher itself
    /// lives for the whole session
    pub fn reset(&mut self) {
        self.stability.reset();
        self.cooldowns.reset();
        self.gather_hold.clear();
        self.charge_hold.clear();
        self.last_gesture = GestureType::None;
        self.charging = false;
        self.gathering = false;
        self.current_action = None;
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_trigger_fires_once() {
        let mut hold = HoldTrigger::new(3000.0);
        hold.start(0.0);
        assert!(!hold.complete(1000.0));
        assert!(!hold.complete(2999.0));
        assert!(hold.complete(3000.0));
        assert!(!hold.complete(4000.0));
        assert!(hold.has_fired());
    }

    #[test]
    fn test_hold_trigger_restart_clears_latch() {
        let mut hold = HoldTrigger::new(1000.0);
        hold.start(0.0);
        assert!(hold.complete(1500.0));
        hold.start(2000.0);
        assert!(!hold.has_fired());
        assert!(!hold.complete(2500.0));
        assert!(hold.complete(3000.0));
    }

    #[test]
    fn test_hold_trigger_progress() {
        let mut hold = HoldTrigger::new(2000.0);
        assert_eq!(hold.progress(500.0), 0.0);
        hold.start(0.0);
        assert!((hold.progress(1000.0) - 0.5).abs() < 1e-6);
        assert_eq!(hold.progress(5000.0), 1.0);
    }
}
