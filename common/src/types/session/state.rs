use std::fmt;

use crate::constants::MILLIS_PER_SECOND;
use crate::types::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle => f.write_str("idle"),
            SessionPhase::Running => f.write_str("running"),
        }
    }
}

/// Lifecycle of the one session the logger can hold at a time.
///
/// Only the session controller changes it; samplers get a copy when they are
/// activated and derive relative timestamps from `started_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    phase: SessionPhase,
    started_at: Option<Clock>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn running(started_at: Clock) -> Self {
        Self {
            phase: SessionPhase::Running,
            started_at: Some(started_at),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn started_at(&self) -> Option<Clock> {
        self.started_at
    }

    /// Milliseconds since start as seen at `now`; 0 while idle.
    pub fn elapsed_millis_at(&self, now: &Clock) -> u64 {
        match (self.phase, self.started_at) {
            (SessionPhase::Running, Some(started_at)) => now.millis_since(&started_at),
            _ => 0,
        }
    }

    /// Whole seconds since start as seen at `now`; 0 while idle.
    pub fn elapsed_seconds_at(&self, now: &Clock) -> u64 {
        self.elapsed_millis_at(now) / MILLIS_PER_SECOND
    }
}
