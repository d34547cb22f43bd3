use std::time::Duration;
use tokio::time::Instant;

/// Monotonic point in time.
///
/// Backed by `tokio::time::Instant`, so it never jumps with wall-clock
/// adjustments and follows the paused clock inside `#[tokio::test(start_paused = true)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Clock(Instant);

impl Clock {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    pub fn from_instant(instant: Instant) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> Instant {
        self.0
    }

    /// Time elapsed between `earlier` and `self`, saturating at zero.
    pub fn duration_since(&self, earlier: &Clock) -> Duration {
        self.0.saturating_duration_since(earlier.0)
    }

    /// Milliseconds elapsed between `earlier` and `self`.
    pub fn millis_since(&self, earlier: &Clock) -> u64 {
        u64::try_from(self.duration_since(earlier).as_millis()).unwrap_or(u64::MAX)
    }

    /// Milliseconds elapsed from `self` until now.
    pub fn elapsed_millis(&self) -> u64 {
        Clock::now().millis_since(self)
    }
}
