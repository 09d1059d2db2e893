//! Mount/unmount lifecycle of a single tile.
//!
//! `Entering → Steady → Exiting → Removed`. Progress runs from 0 (hidden
//! pose: transparent, half size, pushed down) to 1 (steady pose).

use crate::constants::{ENTRANCE_OFFSET_Y_PX, ENTRANCE_START_SCALE};
use crate::easing::CubicBezier;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresencePhase {
    /// `elapsed` counts from mount and includes the stagger delay.
    Entering { elapsed: f32 },
    Steady,
    /// `from` is the progress the tile had when the exit began.
    Exiting { elapsed: f32, from: f32 },
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresenceTiming {
    pub delay_sec: f32,
    pub enter_sec: f32,
    pub exit_sec: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presence {
    phase: PresencePhase,
    timing: PresenceTiming,
}

impl Presence {
    pub fn entering(timing: PresenceTiming) -> Self {
        Self {
            phase: PresencePhase::Entering { elapsed: 0.0 },
            timing,
        }
    }

    pub fn steady(timing: PresenceTiming) -> Self {
        Self {
            phase: PresencePhase::Steady,
            timing,
        }
    }

    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    pub fn is_removed(&self) -> bool {
        self.phase == PresencePhase::Removed
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            PresencePhase::Entering { .. } | PresencePhase::Exiting { .. }
        )
    }

    pub fn tick(&mut self, dt_sec: f32) -> PresencePhase {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.phase = match self.phase {
            PresencePhase::Entering { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.timing.delay_sec + self.timing.enter_sec {
                    PresencePhase::Steady
                } else {
                    PresencePhase::Entering { elapsed }
                }
            }
            PresencePhase::Exiting { elapsed, from } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.timing.exit_sec {
                    PresencePhase::Removed
                } else {
                    PresencePhase::Exiting { elapsed, from }
                }
            }
            other => other,
        };
        self.phase
    }

    /// Cut a running entrance short.
    pub fn settle(&mut self) {
        if let PresencePhase::Entering { .. } = self.phase {
            self.phase = PresencePhase::Steady;
        }
    }

    /// Start the exit from wherever the tile currently is.
    pub fn begin_exit(&mut self, ease: &CubicBezier) {
        let from = match self.phase {
            PresencePhase::Exiting { .. } | PresencePhase::Removed => return,
            _ => self.progress(ease),
        };
        self.phase = if self.timing.exit_sec <= 0.0 || from <= 0.0 {
            PresencePhase::Removed
        } else {
            PresencePhase::Exiting { elapsed: 0.0, from }
        };
    }

    pub fn progress(&self, ease: &CubicBezier) -> f32 {
        match self.phase {
            PresencePhase::Entering { elapsed } => {
                if self.timing.enter_sec <= 0.0 {
                    return if elapsed >= self.timing.delay_sec { 1.0 } else { 0.0 };
                }
                let t = (elapsed - self.timing.delay_sec) / self.timing.enter_sec;
                ease.ease(t.clamp(0.0, 1.0))
            }
            PresencePhase::Steady => 1.0,
            PresencePhase::Exiting { elapsed, from } => {
                let t = (elapsed / self.timing.exit_sec).clamp(0.0, 1.0);
                from * (1.0 - ease.ease(t))
            }
            PresencePhase::Removed => 0.0,
        }
    }

    pub fn pose(&self, ease: &CubicBezier) -> PresencePose {
        PresencePose::at(self.progress(ease))
    }
}

/// Multipliers and offset applied on top of the spring-smoothed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresencePose {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
}

impl PresencePose {
    pub const STEADY: PresencePose = PresencePose {
        opacity: 1.0,
        scale: 1.0,
        offset_y: 0.0,
    };

    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            opacity: p,
            scale: ENTRANCE_START_SCALE + (1.0 - ENTRANCE_START_SCALE) * p,
            offset_y: ENTRANCE_OFFSET_Y_PX * (1.0 - p),
        }
    }
}
