/// Notifications published by the session controller to UI collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    /// Elapsed-time display refresh.
    Elapsed {
        millis: u64,
    },
    Stopped {
        duration_seconds: u64,
        heart_rate_samples: usize,
        imu_samples: usize,
    },
}
