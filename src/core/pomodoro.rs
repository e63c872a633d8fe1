//! # Pomodoro
//!
//! Two timers and a phase flag. The phase decides which timer is current.
//!
//! ```text
//!   Focus (25m) ──start_break()──▶ Break (5m) ──complete()──▶ Completed
//!      ▲                                                          │
//!      └──────────────────────────── reset() ─────────────────────┘
//! ```
//!
//! `Completed` has no current timer: it reports zero remaining and counts
//! as expired. Transitions from the wrong phase are rejected with
//! [`PomodoroError::InvalidTransition`] and leave the state untouched.

use std::fmt;
use std::time::Duration;

use log::{debug, info};

use super::timer::Timer;

pub const FOCUS_DURATION: Duration = Duration::from_secs(25 * 60);
pub const BREAK_DURATION: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    Break,
    Completed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "focus",
            Phase::Break => "break",
            Phase::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PomodoroError {
    /// `action` is not allowed while in phase `from`.
    InvalidTransition { from: Phase, action: &'static str },
}

impl fmt::Display for PomodoroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PomodoroError::InvalidTransition { from, action } => {
                write!(f, "cannot {action} during {} phase", from.label())
            }
        }
    }
}

impl std::error::Error for PomodoroError {}

#[derive(Debug, Clone)]
pub struct Pomodoro {
    phase: Phase,
    focus: Timer,
    rest: Timer,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new()
    }
}

impl Pomodoro {
    /// Begin a cycle: focus timer running, break timer idle.
    pub fn new() -> Self {
        Self {
            phase: Phase::Focus,
            focus: Timer::start(FOCUS_DURATION),
            rest: Timer::idle(BREAK_DURATION),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The timer the current phase runs on. `None` once the cycle is done.
    pub fn current_timer(&self) -> Option<&Timer> {
        match self.phase {
            Phase::Focus => Some(&self.focus),
            Phase::Break => Some(&self.rest),
            Phase::Completed => None,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.current_timer()
            .map_or(Duration::ZERO, Timer::remaining)
    }

    pub fn is_expired(&self) -> bool {
        self.current_timer().is_none_or(Timer::is_expired)
    }

    pub fn start_break(&mut self) -> Result<(), PomodoroError> {
        if self.phase != Phase::Focus {
            return Err(PomodoroError::InvalidTransition {
                from: self.phase,
                action: "start break",
            });
        }
        self.focus.stop();
        self.rest.reset(BREAK_DURATION);
        self.phase = Phase::Break;
        info!("Pomodoro: focus finished, break started");
        Ok(())
    }

    /// Close the cycle after the break. Both timers stop.
    pub fn complete(&mut self) -> Result<(), PomodoroError> {
        if self.phase != Phase::Break {
            return Err(PomodoroError::InvalidTransition {
                from: self.phase,
                action: "complete cycle",
            });
        }
        self.stop();
        self.phase = Phase::Completed;
        info!("Pomodoro: cycle completed");
        Ok(())
    }

    /// Halt both timers whatever the phase.
    pub fn stop(&mut self) {
        self.focus.stop();
        self.rest.stop();
    }

    /// Back to a fresh focus phase.
    pub fn reset(&mut self) {
        self.focus.reset(FOCUS_DURATION);
        self.rest = Timer::idle(BREAK_DURATION);
        self.phase = Phase::Focus;
        debug!("Pomodoro: reset to focus");
    }
}
