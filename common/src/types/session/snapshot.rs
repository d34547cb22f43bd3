use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::traits::sample::first_decreasing;
use crate::types::timed::{HeartRateSample, ImuSample};
use crate::types::untimed::RotationSample;
use crate::TimedSample;

/// Everything recorded during one session, taken at stop.
///
/// Field names on the wire follow the collector's `/end` payload:
/// `heart_rates`, `rotation_vectors`, `imu`, `duration`, `heart_rate_hz`, `imu_hz`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub heart_rates: Vec<HeartRateSample>,
    #[serde(rename = "rotation_vectors")]
    pub rotations: Vec<RotationSample>,
    pub imu: Vec<ImuSample>,
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
    pub heart_rate_hz: f64,
    pub imu_hz: u32,
}

impl SessionSnapshot {
    pub fn new(
        heart_rates: Vec<HeartRateSample>,
        rotations: Vec<RotationSample>,
        imu: Vec<ImuSample>,
        duration_seconds: u64,
        heart_rate_hz: f64,
        imu_hz: u32,
    ) -> Self {
        Self {
            heart_rates,
            rotations,
            imu,
            duration_seconds,
            heart_rate_hz,
            imu_hz,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heart_rates.is_empty() && self.rotations.is_empty() && self.imu.is_empty()
    }

    /// Checks the invariants the sampler is supposed to uphold.
    ///
    /// A snapshot failing here cannot be represented in the collector's JSON
    /// (non-finite floats) or would be misread by it (misaligned motion buffers,
    /// timestamps going backwards).
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if !self.heart_rate_hz.is_finite() {
            return Err(SnapshotError::InvalidRate(format!(
                "heart_rate_hz = {}",
                self.heart_rate_hz
            )));
        }
        if self.rotations.len() != self.imu.len() {
            return Err(SnapshotError::MisalignedMotion {
                rotations: self.rotations.len(),
                imu: self.imu.len(),
            });
        }
        if let Some(index) = first_decreasing(&self.heart_rates) {
            return Err(SnapshotError::DecreasingTimestamp {
                buffer: "heart_rates",
                index,
            });
        }
        if let Some(index) = first_decreasing(&self.imu) {
            return Err(SnapshotError::DecreasingTimestamp {
                buffer: "imu",
                index,
            });
        }
        if let Some(index) = self.imu.iter().position(|s| !s.is_finite()) {
            return Err(SnapshotError::NonFinite {
                buffer: "imu",
                index,
            });
        }
        if let Some(index) = self.rotations.iter().position(|s| !s.is_finite()) {
            return Err(SnapshotError::NonFinite {
                buffer: "rotation_vectors",
                index,
            });
        }
        Ok(())
    }
}
