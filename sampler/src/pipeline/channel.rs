use std::fmt;
use std::time::Duration;

use common::{HeartRateSample, ImuSample, SensorStateStore};

use crate::buffer::SessionBuffers;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Set of sensor channels read together on one timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelGroup {
    /// Heart-rate only.
    HeartRate,
    /// Rotation, accelerometer and gyroscope.
    Imu,
}

impl fmt::Display for ChannelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelGroup::HeartRate => f.write_str("heart-rate"),
            ChannelGroup::Imu => f.write_str("imu"),
        }
    }
}

impl ChannelGroup {
    /// Reads the current values of the group and appends them, stamped `t` ms after start.
    pub(crate) async fn sample(&self, t: u64, sensors: &SensorStateStore, buffers: &SessionBuffers) {
        match self {
            ChannelGroup::HeartRate => {
                let sample = HeartRateSample::new(t, sensors.heart_rate());
                buffers.push_heart_rate(sample).await;
            }
            ChannelGroup::Imu => {
                let rotation = sensors.rotation();
                let imu =
                    ImuSample::from_readings(t, sensors.acceleration(), sensors.angular_velocity());
                buffers.push_motion(rotation, imu).await;
            }
        }
    }
}

/// Converts a sampling frequency into a tick period.
///
/// Returns `None` for a zero, negative or non-finite rate, which disables the group.
pub fn period_from_hz(hz: f64) -> Option<Duration> {
    if !hz.is_finite() || hz <= 0.0 {
        return None;
    }
    let micros = (MICROS_PER_SECOND / hz).round().max(1.0);
    Some(Duration::from_micros(micros as u64))
}
