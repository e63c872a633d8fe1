//! # Timer
//!
//! A duration plus the instant it started counting down.
//!
//! ```text
//! remaining = max(0, duration - (now - started_at))   while running
//! remaining = 0                                       once stopped
//! ```
//!
//! Instants come from `tokio::time::Instant`, which behaves like
//! `std::time::Instant` at runtime but follows the paused clock in tests.
//! Every query has an `_at(now)` twin so callers can pin the clock.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    duration: Duration,
    started_at: Instant,
    running: bool,
}

impl Timer {
    /// Start counting down `duration` from now.
    pub fn start(duration: Duration) -> Self {
        Self::start_at(duration, Instant::now())
    }

    pub fn start_at(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            started_at: now,
            running: true,
        }
    }

    /// A timer that holds a duration but is not counting yet.
    /// Reports zero remaining until `reset` starts it.
    pub fn idle(duration: Duration) -> Self {
        Self {
            duration,
            started_at: Instant::now(),
            running: false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    /// Time left as seen from `now`. Never negative; zero when stopped.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        if !self.running {
            return Duration::ZERO;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        self.duration.saturating_sub(elapsed)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_zero()
    }

    /// Stop counting. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Rebind the duration and restart from now.
    pub fn reset(&mut self, duration: Duration) {
        self.reset_at(duration, Instant::now());
    }

    pub fn reset_at(&mut self, duration: Duration, now: Instant) {
        self.duration = duration;
        self.started_at = now;
        self.running = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_fresh_timer_is_not_expired() {
        let now = Instant::now();
        let timer = Timer::start_at(Duration::from_secs(1), now);

        let remaining = timer.remaining_at(now);
        assert!(remaining > Duration::ZERO && remaining <= Duration::from_secs(1));
        assert!(!timer.is_expired_at(now));
        assert!(timer.is_running());
    }

    #[test]
    fn test_fresh_timer_with_real_clock() {
        let timer = Timer::start(Duration::from_secs(60));
        assert!(timer.remaining() <= Duration::from_secs(60));
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_expires_after_duration() {
        let now = Instant::now();
        let timer = Timer::start_at(Duration::from_secs(1), now);

        assert!(!timer.is_expired_at(now + ms(999)));
        assert!(timer.is_expired_at(now + ms(1000)));
        assert!(timer.is_expired_at(now + ms(1100)));
        assert_eq!(timer.remaining_at(now + Duration::from_secs(30)), Duration::ZERO);
    }

    #[test]
    fn test_remaining_is_monotonic() {
        let now = Instant::now();
        let timer = Timer::start_at(Duration::from_secs(2), now);

        let mut last = timer.remaining_at(now);
        for step in 1..=30 {
            let current = timer.remaining_at(now + ms(step * 100));
            assert!(current <= last, "remaining went up at step {step}");
            last = current;
        }
        assert_eq!(last, Duration::ZERO);
    }

    #[test]
    fn test_clock_before_start_reports_full_duration() {
        let now = Instant::now() + Duration::from_secs(10);
        let timer = Timer::start_at(Duration::from_secs(5), now);
        assert_eq!(timer.remaining_at(now - Duration::from_secs(1)), Duration::from_secs(5));
    }

    #[test]
    fn test_stop_zeroes_remaining_and_is_idempotent() {
        let now = Instant::now();
        let mut timer = Timer::start_at(Duration::from_secs(60), now);

        timer.stop();
        assert_eq!(timer.remaining_at(now), Duration::ZERO);
        assert!(timer.is_expired_at(now));

        timer.stop();
        assert_eq!(timer.remaining_at(now + ms(10)), Duration::ZERO);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_revives_expired_timer() {
        let now = Instant::now();
        let mut timer = Timer::start_at(Duration::from_secs(1), now);
        let later = now + ms(1100);
        assert!(timer.is_expired_at(later));

        timer.reset_at(Duration::from_secs(2), later);
        assert!(!timer.is_expired_at(later));
        assert_eq!(timer.duration(), Duration::from_secs(2));
        assert!(timer.remaining_at(later) <= Duration::from_secs(2));
        assert!(timer.remaining_at(later) > Duration::ZERO);
    }

    #[test]
    fn test_reset_restarts_stopped_timer() {
        let mut timer = Timer::start(Duration::from_secs(1));
        timer.stop();
        timer.reset(Duration::from_secs(3));
        assert!(timer.is_running());
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_idle_timer_waits_for_reset() {
        let mut timer = Timer::idle(Duration::from_secs(300));
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert_eq!(timer.duration(), Duration::from_secs(300));

        let now = Instant::now();
        timer.reset_at(Duration::from_secs(300), now);
        assert_eq!(timer.remaining_at(now), Duration::from_secs(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_on_paused_clock() {
        let timer = Timer::start(Duration::from_secs(1));
        assert!(!timer.is_expired());

        tokio::time::advance(ms(1100)).await;
        assert!(timer.is_expired());
    }
}
