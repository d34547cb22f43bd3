use serde::{Deserialize, Serialize};

use crate::types::untimed::XYZ;
use crate::TimedSample;

/// One synchronized accelerometer + gyroscope reading.
///
/// # Examples
///
/// ```
/// use common::{ImuSample, TimedSample, XYZ};
///
/// let sample = ImuSample::from_readings(50, XYZ::new([0.1, 9.8, 0.2]), XYZ::new([0.0, 0.01, 0.0]));
///
/// assert_eq!(sample.get_timestamp_millis(), 50);
/// assert_eq!(sample.acceleration(), XYZ::new([0.1, 9.8, 0.2]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImuSample {
    pub t: u64,
    pub ax: f32,
    pub ay: f32,
    pub az: f32,
    pub gx: f32,
    pub gy: f32,
    pub gz: f32,
}

impl ImuSample {
    pub fn from_readings(t: u64, acceleration: XYZ, angular_velocity: XYZ) -> Self {
        Self {
            t,
            ax: acceleration.x,
            ay: acceleration.y,
            az: acceleration.z,
            gx: angular_velocity.x,
            gy: angular_velocity.y,
            gz: angular_velocity.z,
        }
    }

    pub fn acceleration(&self) -> XYZ {
        XYZ::new([self.ax, self.ay, self.az])
    }

    pub fn angular_velocity(&self) -> XYZ {
        XYZ::new([self.gx, self.gy, self.gz])
    }
}

impl TimedSample for ImuSample {
    fn get_timestamp_millis(&self) -> u64 {
        self.t
    }

    fn is_finite(&self) -> bool {
        self.acceleration().is_finite() && self.angular_velocity().is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imu_sample_split_readings() {
        let sample = ImuSample::from_readings(
            100,
            XYZ::new([1.0, 2.0, 3.0]),
            XYZ::new([4.0, 5.0, 6.0]),
        );
        assert_eq!(sample.t, 100);
        assert_eq!(sample.acceleration().inner(), [1.0, 2.0, 3.0]);
        assert_eq!(sample.angular_velocity().inner(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_imu_sample_not_finite() {
        let sample = ImuSample::from_readings(
            0,
            XYZ::new([1.0, f32::INFINITY, 3.0]),
            XYZ::default(),
        );
        assert!(!sample.is_finite());
    }
}
