//! Action events and cooldown bookkeeping.
//!
//! Actions are the discrete outputs of the input engine. The dispatcher
//! and the pointer adapter append [`ActionEvent`]s to a queue the host
//! drains once per tick; a dropped or ignored event is never an error.

use crate::config::CooldownConfig;
use log::debug;
use std::collections::HashMap;

/// Kind tag for an action, used for cooldown bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Slash,
    Charge,
    Release,
    Gather,
    SwordRain,
    Wave,
    Thrust,
}

/// A high-level game action emitted by the input engine.
///
/// Coordinates are in render-surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEvent {
    /// Continuous cursor movement, emitted every qualifying frame
    Move { x: f32, y: f32 },
    /// Fast pointing motion
    Slash,
    /// Charge hold completed; the sword starts charging
    Charge,
    /// Charge released with the accumulated charge level in [0, 1]
    Release { charge_level: f32 },
    /// Gather hold completed; swords start gathering
    Gather,
    /// Gathered swords released all at once
    SwordRain,
    /// Sword wave (pointer double-tap)
    Wave,
    /// Forward thrust at a target point (pointer tap)
    Thrust { x: f32, y: f32 },
}

impl ActionEvent {
    /// Kind tag of this event
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Move { .. } => ActionKind::Move,
            Self::Slash => ActionKind::Slash,
            Self::Charge => ActionKind::Charge,
            Self::Release { .. } => ActionKind::Release,
            Self::Gather => ActionKind::Gather,
            Self::SwordRain => ActionKind::SwordRain,
            Self::Wave => ActionKind::Wave,
            Self::Thrust { .. } => ActionKind::Thrust,
        }
    }
}

/// Per-action-kind cooldown timers.
///
/// Each last-fire timestamp is stamped only on a successful fire, so the
/// stored timestamps are monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct CooldownTable {
    config: CooldownConfig,
    last_fire_ms: HashMap<ActionKind, f64>,
}

impl CooldownTable {
    /// Create a table from configured cooldown durations
    #[must_use]
    pub fn new(config: CooldownConfig) -> Self {
        Self {
            config,
            last_fire_ms: HashMap::new(),
        }
    }

    /// Cooldown duration for a kind, `None` for uncooled kinds
    #[must_use]
    pub fn cooldown_ms(&self, kind: ActionKind) -> Option<f64> {
        match kind {
            ActionKind::Slash => Some(self.config.slash_ms),
            ActionKind::Wave => Some(self.config.wave_ms),
            ActionKind::Thrust => Some(self.config.thrust_ms),
            ActionKind::SwordRain => Some(self.config.sword_rain_ms),
            ActionKind::Gather => Some(self.config.gather_ms),
            ActionKind::Move | ActionKind::Charge | ActionKind::Release => None,
        }
    }

    /// Check the cooldown for `kind` and, if it has elapsed, stamp the
    /// fire time and return `true`. On a cooldown miss nothing is stamped
    /// and the caller drops the action silently.
    pub fn try_fire(&mut self, kind: ActionKind, now_ms: f64) -> bool {
        let Some(cooldown) = self.cooldown_ms(kind) else {
            return true;
        };

        if let Some(&last) = self.last_fire_ms.get(&kind) {
            if now_ms - last <= cooldown {
                debug!("{kind:?} on cooldown ({:.0}ms remaining)", cooldown - (now_ms - last));
                return false;
            }
        }

        self.last_fire_ms.insert(kind, now_ms);
        true
    }

    /// Clear all fire timestamps
    pub fn reset(&mut self) {
        self.last_fire_ms.clear();
    }
}
