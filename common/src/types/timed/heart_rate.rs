use serde::{Deserialize, Serialize};

use crate::TimedSample;

/// Heart-rate reading taken `t` milliseconds after session start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateSample {
    pub t: u64,
    pub bpm: i32,
}

impl HeartRateSample {
    pub fn new(t: u64, bpm: i32) -> Self {
        Self { t, bpm }
    }
}

impl TimedSample for HeartRateSample {
    fn get_timestamp_millis(&self) -> u64 {
        self.t
    }

    fn is_finite(&self) -> bool {
        true
    }
}
