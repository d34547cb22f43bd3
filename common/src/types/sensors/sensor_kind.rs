use std::fmt;

/// Physical sensor channels feeding the logger.
///
/// # Examples
///
/// ```
/// use common::SensorKind;
///
/// assert_eq!(SensorKind::try_from("HR").unwrap(), SensorKind::HeartRate);
/// assert_eq!(SensorKind::try_from("gyroscope").unwrap(), SensorKind::Gyroscope);
/// assert!(SensorKind::try_from("magnetometer").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorKind {
    HeartRate,
    RotationVector,
    Accelerometer,
    Gyroscope,
}

impl SensorKind {
    pub fn all() -> [SensorKind; 4] {
        [
            SensorKind::HeartRate,
            SensorKind::RotationVector,
            SensorKind::Accelerometer,
            SensorKind::Gyroscope,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::HeartRate => "heart_rate",
            SensorKind::RotationVector => "rotation",
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::Gyroscope => "gyroscope",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for SensorKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "heart_rate" | "heartrate" | "hr" => Ok(Self::HeartRate),
            "rotation" | "rotation_vector" | "rot" => Ok(Self::RotationVector),
            "accelerometer" | "acc" => Ok(Self::Accelerometer),
            "gyroscope" | "gyro" => Ok(Self::Gyroscope),
            other => Err(format!("Unknown sensor kind: {}", other)),
        }
    }
}

impl TryFrom<String> for SensorKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SensorKind::try_from(value.as_str())
    }
}
