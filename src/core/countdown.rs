//! # Countdown
//!
//! The thing the render loop counts down: either one plain [`Timer`] or a
//! [`Pomodoro`] cycle. Both answer the same questions (`remaining`,
//! `is_expired`, `stop`), so the loop never needs to know which it holds
//! until a timer runs out.

use std::time::Duration;

use super::config::Mode;
use super::pomodoro::{Phase, Pomodoro};
use super::timer::Timer;

#[derive(Debug, Clone)]
pub enum Countdown {
    Simple(Timer),
    Pomodoro(Pomodoro),
}

/// What the painter needs to draw one countdown frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownView {
    pub remaining: Duration,
    pub total: Duration,
    /// `None` for a plain countdown.
    pub phase: Option<Phase>,
}

impl CountdownView {
    /// Fraction of the current timer already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total.is_zero() {
            return 1.0;
        }
        let left = self.remaining.as_secs_f64() / self.total.as_secs_f64();
        (1.0 - left).clamp(0.0, 1.0)
    }
}

impl Countdown {
    /// Start counting for `mode` from now.
    pub fn start(mode: Mode) -> Self {
        match mode {
            Mode::Simple(duration) => Countdown::Simple(Timer::start(duration)),
            Mode::Pomodoro => Countdown::Pomodoro(Pomodoro::new()),
        }
    }

    pub fn remaining(&self) -> Duration {
        match self {
            Countdown::Simple(timer) => timer.remaining(),
            Countdown::Pomodoro(pomodoro) => pomodoro.remaining(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self {
            Countdown::Simple(timer) => timer.is_expired(),
            Countdown::Pomodoro(pomodoro) => pomodoro.is_expired(),
        }
    }

    pub fn stop(&mut self) {
        match self {
            Countdown::Simple(timer) => timer.stop(),
            Countdown::Pomodoro(pomodoro) => pomodoro.stop(),
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            Countdown::Simple(_) => None,
            Countdown::Pomodoro(pomodoro) => Some(pomodoro.phase()),
        }
    }

    /// Full length of the timer currently counting.
    pub fn total(&self) -> Duration {
        match self {
            Countdown::Simple(timer) => timer.duration(),
            Countdown::Pomodoro(pomodoro) => pomodoro
                .current_timer()
                .map_or(Duration::ZERO, Timer::duration),
        }
    }

    pub fn view(&self) -> CountdownView {
        CountdownView {
            remaining: self.remaining(),
            total: self.total(),
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pomodoro::{BREAK_DURATION, FOCUS_DURATION};

    #[test]
    fn test_simple_mode_view() {
        let countdown = Countdown::start(Mode::Simple(Duration::from_secs(90)));
        let view = countdown.view();
        assert_eq!(view.total, Duration::from_secs(90));
        assert!(view.remaining <= Duration::from_secs(90));
        assert_eq!(view.phase, None);
        assert!(!countdown.is_expired());
    }

    #[test]
    fn test_pomodoro_mode_view() {
        let countdown = Countdown::start(Mode::Pomodoro);
        let view = countdown.view();
        assert_eq!(view.total, FOCUS_DURATION);
        assert_eq!(view.phase, Some(Phase::Focus));
    }

    #[test]
    fn test_pomodoro_total_follows_phase() {
        let mut countdown = Countdown::start(Mode::Pomodoro);
        if let Countdown::Pomodoro(pomodoro) = &mut countdown {
            pomodoro.start_break().unwrap();
        }
        assert_eq!(countdown.total(), BREAK_DURATION);
        assert_eq!(countdown.phase(), Some(Phase::Break));
    }

    #[test]
    fn test_stop_expires_either_variant() {
        let mut simple = Countdown::start(Mode::Simple(Duration::from_secs(60)));
        simple.stop();
        assert!(simple.is_expired());
        assert_eq!(simple.remaining(), Duration::ZERO);

        let mut pomodoro = Countdown::start(Mode::Pomodoro);
        pomodoro.stop();
        assert!(pomodoro.is_expired());
    }

    #[test]
    fn test_progress_bounds() {
        let view = CountdownView {
            remaining: Duration::from_secs(60),
            total: Duration::from_secs(60),
            phase: None,
        };
        assert_eq!(view.progress(), 0.0);

        let half = CountdownView {
            remaining: Duration::from_secs(30),
            ..view
        };
        assert!((half.progress() - 0.5).abs() < f64::EPSILON);

        let done = CountdownView {
            remaining: Duration::ZERO,
            total: Duration::ZERO,
            phase: Some(Phase::Completed),
        };
        assert_eq!(done.progress(), 1.0);
    }
}
