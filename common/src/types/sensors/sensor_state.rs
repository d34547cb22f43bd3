use super::{LatestValue, SensorEvent, SensorKind};
use crate::types::untimed::{RotationSample, XYZ};

/// Latest observed value per sensor channel.
///
/// Written asynchronously by hardware callbacks through [`SensorStateStore::apply`],
/// read by the sampler on each tick. There is no queue: a newer event simply
/// replaces the previous one.
#[derive(Debug)]
pub struct SensorStateStore {
    heart_rate: LatestValue<i32>,
    rotation: LatestValue<RotationSample>,
    acceleration: LatestValue<XYZ>,
    angular_velocity: LatestValue<XYZ>,
}

impl Default for SensorStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorStateStore {
    pub fn new() -> Self {
        Self {
            heart_rate: LatestValue::new(0),
            rotation: LatestValue::new(RotationSample::default()),
            acceleration: LatestValue::new(XYZ::default()),
            angular_velocity: LatestValue::new(XYZ::default()),
        }
    }

    /// Updates the channel addressed by `event`.
    ///
    /// Returns false, leaving the store untouched, when the event carries too
    /// few values for its channel: heart-rate needs one, the other channels
    /// need three. Heart-rate is truncated to whole beats per minute.
    pub fn apply(&self, event: &SensorEvent) -> bool {
        match event.kind {
            SensorKind::HeartRate => match event.values.first() {
                Some(bpm) => {
                    self.heart_rate.store(*bpm as i32);
                    true
                }
                None => false,
            },
            SensorKind::RotationVector => RotationSample::try_from(event.values.as_slice())
                .map(|rotation| self.rotation.store(rotation))
                .is_ok(),
            SensorKind::Accelerometer => XYZ::try_from(event.values.as_slice())
                .map(|xyz| self.acceleration.store(xyz))
                .is_ok(),
            SensorKind::Gyroscope => XYZ::try_from(event.values.as_slice())
                .map(|xyz| self.angular_velocity.store(xyz))
                .is_ok(),
        }
    }

    pub fn set_heart_rate(&self, bpm: i32) {
        self.heart_rate.store(bpm);
    }

    pub fn set_rotation(&self, rotation: RotationSample) {
        self.rotation.store(rotation);
    }

    pub fn set_acceleration(&self, acceleration: XYZ) {
        self.acceleration.store(acceleration);
    }

    pub fn set_angular_velocity(&self, angular_velocity: XYZ) {
        self.angular_velocity.store(angular_velocity);
    }

    pub fn heart_rate(&self) -> i32 {
        self.heart_rate.load()
    }

    pub fn rotation(&self) -> RotationSample {
        self.rotation.load()
    }

    pub fn acceleration(&self) -> XYZ {
        self.acceleration.load()
    }

    pub fn angular_velocity(&self) -> XYZ {
        self.angular_velocity.load()
    }

    /// Number of accepted events for `kind` since the store was created.
    pub fn updates(&self, kind: SensorKind) -> u64 {
        match kind {
            SensorKind::HeartRate => self.heart_rate.version(),
            SensorKind::RotationVector => self.rotation.version(),
            SensorKind::Accelerometer => self.acceleration.version(),
            SensorKind::Gyroscope => self.angular_velocity.version(),
        }
    }
}
