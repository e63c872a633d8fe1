//! # Flourish
//!
//! The blinking screen shown when a timer runs out. It is driven by the
//! same events as the main loop, only with a slower tick:
//!
//! ```text
//! kind            frame   frames      blinks
//! TimeUp          200ms   25 (~5s)    yes
//! FocusComplete   300ms   until Enter no
//! BreakComplete   300ms   17 (~5s)    yes
//! ```
//!
//! Enter dismisses early; a cancel key or termination signal aborts.

use std::time::Duration;

use super::action::{InputEvent, is_cancel_key, is_enter_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlourishKind {
    /// A plain countdown reached zero.
    TimeUp,
    /// Pomodoro focus is over; waits for Enter to start the break.
    FocusComplete,
    /// Pomodoro break is over; the cycle is finished.
    BreakComplete,
}

impl FlourishKind {
    pub fn frame_period(self) -> Duration {
        match self {
            FlourishKind::TimeUp => Duration::from_millis(200),
            FlourishKind::FocusComplete | FlourishKind::BreakComplete => {
                Duration::from_millis(300)
            }
        }
    }

    /// Frames before the flourish ends by itself. `None` waits for Enter.
    pub fn frame_limit(self) -> Option<u32> {
        match self {
            FlourishKind::TimeUp => Some(25),
            FlourishKind::FocusComplete => None,
            FlourishKind::BreakComplete => Some(17),
        }
    }

    pub fn blinks(self) -> bool {
        !matches!(self, FlourishKind::FocusComplete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlourishOutcome {
    /// Ran out of frames.
    Finished,
    /// User pressed Enter.
    Dismissed,
    /// Cancel key or termination signal.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlourishStep {
    Draw { visible: bool },
    Ignore,
    Done(FlourishOutcome),
}

#[derive(Debug, Clone)]
pub struct Flourish {
    kind: FlourishKind,
    frame: u32,
}

impl Flourish {
    pub fn new(kind: FlourishKind) -> Self {
        Self { kind, frame: 0 }
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u32 {
        self.frame
    }

    pub fn handle(&mut self, event: InputEvent) -> FlourishStep {
        match event {
            InputEvent::TerminationSignal => FlourishStep::Done(FlourishOutcome::Cancelled),
            InputEvent::KeyPress(key) if is_cancel_key(key) => {
                FlourishStep::Done(FlourishOutcome::Cancelled)
            }
            InputEvent::KeyPress(key) if is_enter_key(key) => {
                FlourishStep::Done(FlourishOutcome::Dismissed)
            }
            InputEvent::KeyPress(_) => FlourishStep::Ignore,
            InputEvent::Tick => {
                if self.kind.frame_limit().is_some_and(|limit| self.frame >= limit) {
                    return FlourishStep::Done(FlourishOutcome::Finished);
                }
                let visible = !self.kind.blinks() || self.frame % 2 == 0;
                self.frame += 1;
                FlourishStep::Draw { visible }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{CTRL_C, CTRL_Q};

    fn run_ticks(flourish: &mut Flourish, ticks: u32) -> Vec<FlourishStep> {
        (0..ticks).map(|_| flourish.handle(InputEvent::Tick)).collect()
    }

    #[test]
    fn test_time_up_blinks_for_25_frames() {
        let mut flourish = Flourish::new(FlourishKind::TimeUp);
        let steps = run_ticks(&mut flourish, 25);

        assert_eq!(steps[0], FlourishStep::Draw { visible: true });
        assert_eq!(steps[1], FlourishStep::Draw { visible: false });
        assert_eq!(steps[24], FlourishStep::Draw { visible: true });
        assert_eq!(flourish.frames(), 25);

        assert_eq!(
            flourish.handle(InputEvent::Tick),
            FlourishStep::Done(FlourishOutcome::Finished)
        );
    }

    #[test]
    fn test_break_complete_stops_after_17_frames() {
        let mut flourish = Flourish::new(FlourishKind::BreakComplete);
        let steps = run_ticks(&mut flourish, 18);
        assert!(steps[..17].iter().all(|s| matches!(s, FlourishStep::Draw { .. })));
        assert_eq!(steps[17], FlourishStep::Done(FlourishOutcome::Finished));
    }

    #[test]
    fn test_focus_complete_waits_for_enter() {
        let mut flourish = Flourish::new(FlourishKind::FocusComplete);
        let steps = run_ticks(&mut flourish, 200);
        assert!(steps.iter().all(|s| *s == FlourishStep::Draw { visible: true }));

        assert_eq!(flourish.handle(InputEvent::KeyPress(b'x')), FlourishStep::Ignore);
        assert_eq!(
            flourish.handle(InputEvent::KeyPress(b'\r')),
            FlourishStep::Done(FlourishOutcome::Dismissed)
        );
    }

    #[test]
    fn test_line_feed_also_dismisses() {
        let mut flourish = Flourish::new(FlourishKind::TimeUp);
        assert_eq!(
            flourish.handle(InputEvent::KeyPress(b'\n')),
            FlourishStep::Done(FlourishOutcome::Dismissed)
        );
    }

    #[test]
    fn test_cancel_paths() {
        for event in [
            InputEvent::TerminationSignal,
            InputEvent::KeyPress(CTRL_Q),
            InputEvent::KeyPress(CTRL_C),
        ] {
            let mut flourish = Flourish::new(FlourishKind::FocusComplete);
            assert_eq!(
                flourish.handle(event),
                FlourishStep::Done(FlourishOutcome::Cancelled)
            );
        }
    }

    #[test]
    fn test_frame_periods() {
        assert_eq!(FlourishKind::TimeUp.frame_period(), Duration::from_millis(200));
        assert_eq!(FlourishKind::BreakComplete.frame_period(), Duration::from_millis(300));
        assert!(!FlourishKind::FocusComplete.blinks());
    }
}
