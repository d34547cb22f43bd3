use super::SensorKind;

/// Raw reading pushed by the hardware layer, at whatever rate it runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorEvent {
    pub kind: SensorKind,
    pub values: Vec<f32>,
}

impl SensorEvent {
    pub fn new(kind: SensorKind, values: Vec<f32>) -> Self {
        Self { kind, values }
    }

    pub fn heart_rate(bpm: f32) -> Self {
        Self::new(SensorKind::HeartRate, vec![bpm])
    }

    pub fn rotation(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::new(SensorKind::RotationVector, vec![x, y, z, w])
    }

    pub fn accelerometer(x: f32, y: f32, z: f32) -> Self {
        Self::new(SensorKind::Accelerometer, vec![x, y, z])
    }

    pub fn gyroscope(x: f32, y: f32, z: f32) -> Self {
        Self::new(SensorKind::Gyroscope, vec![x, y, z])
    }
}
