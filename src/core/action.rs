//! # Actions
//!
//! Everything that can happen to a running countdown becomes an `Action`.
//! A tick arrives? That's `Action::Input(InputEvent::Tick)`.
//! The flourish screen ends? That's `Action::FlourishEnded(outcome)`.
//!
//! `update()` applies the action to the [`Countdown`] and returns the
//! [`Effect`] the render loop must carry out. No I/O here.
//!
//! ```text
//! Countdown + Action  →  update()  →  Effect
//! ```

use log::{debug, info, warn};

use super::countdown::Countdown;
use super::flourish::{FlourishKind, FlourishOutcome};
use super::pomodoro::Phase;

/// DC1, sent by Ctrl+Q in raw mode.
pub const CTRL_Q: u8 = 17;
/// ETX, sent by Ctrl+C once raw mode has disabled SIGINT generation.
pub const CTRL_C: u8 = 3;
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const LINE_FEED: u8 = b'\n';

pub fn is_cancel_key(key: u8) -> bool {
    key == CTRL_Q || key == CTRL_C
}

pub fn is_enter_key(key: u8) -> bool {
    key == CARRIAGE_RETURN || key == LINE_FEED
}

/// One item of the merged event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Tick,
    KeyPress(u8),
    TerminationSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(InputEvent),
    FlourishEnded(FlourishOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    /// Redraw once more, then run the flourish and report back.
    StartFlourish(FlourishKind),
    Exit(ExitReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Plain countdown reached zero.
    Expired,
    /// Focus and break both done.
    CycleFinished,
    /// Cancel key or termination signal.
    Cancelled,
}

impl ExitReason {
    /// Line printed once the terminal is restored.
    pub fn farewell(self) -> Option<&'static str> {
        match self {
            ExitReason::Expired => Some("Time's up!"),
            ExitReason::CycleFinished => Some("Pomodoro cycle finished!"),
            ExitReason::Cancelled => None,
        }
    }
}

pub fn update(countdown: &mut Countdown, action: Action) -> Effect {
    match action {
        Action::Input(InputEvent::TerminationSignal) => {
            info!("Termination signal received, stopping");
            cancel(countdown)
        }
        Action::Input(InputEvent::KeyPress(key)) if is_cancel_key(key) => {
            info!("Cancel key {key} pressed, stopping");
            cancel(countdown)
        }
        Action::Input(InputEvent::KeyPress(key)) => {
            debug!("Ignoring key {key}");
            Effect::None
        }
        Action::Input(InputEvent::Tick) => {
            if !countdown.is_expired() {
                return Effect::Redraw;
            }
            match expiry_flourish(countdown) {
                Some(kind) => {
                    info!("Timer expired, starting {kind:?} flourish");
                    Effect::StartFlourish(kind)
                }
                None => Effect::Exit(ExitReason::CycleFinished),
            }
        }
        Action::FlourishEnded(FlourishOutcome::Cancelled) => cancel(countdown),
        Action::FlourishEnded(outcome) => {
            debug!("Flourish ended: {outcome:?}");
            finish_phase(countdown)
        }
    }
}

fn cancel(countdown: &mut Countdown) -> Effect {
    countdown.stop();
    Effect::Exit(ExitReason::Cancelled)
}

/// Which flourish an expired countdown shows. `None` once a cycle is done.
fn expiry_flourish(countdown: &Countdown) -> Option<FlourishKind> {
    match countdown.phase() {
        None => Some(FlourishKind::TimeUp),
        Some(Phase::Focus) => Some(FlourishKind::FocusComplete),
        Some(Phase::Break) => Some(FlourishKind::BreakComplete),
        Some(Phase::Completed) => None,
    }
}

fn finish_phase(countdown: &mut Countdown) -> Effect {
    match countdown {
        Countdown::Simple(timer) => {
            timer.stop();
            Effect::Exit(ExitReason::Expired)
        }
        Countdown::Pomodoro(pomodoro) => match pomodoro.phase() {
            Phase::Focus => match pomodoro.start_break() {
                Ok(()) => Effect::Redraw,
                Err(e) => {
                    warn!("{e}");
                    Effect::Exit(ExitReason::Cancelled)
                }
            },
            Phase::Break => {
                if let Err(e) = pomodoro.complete() {
                    warn!("{e}");
                }
                Effect::Exit(ExitReason::CycleFinished)
            }
            Phase::Completed => Effect::Exit(ExitReason::CycleFinished),
        },
    }
}
