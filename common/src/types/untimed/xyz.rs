use serde::{Deserialize, Serialize};

use crate::constants::N_XYZ_COORDINATES;

/// Latest 3-axis reading from an accelerometer [m/s^2] or gyroscope [rad/s].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct XYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl XYZ {
    pub fn new(data: [f32; N_XYZ_COORDINATES]) -> Self {
        Self {
            x: data[0],
            y: data[1],
            z: data[2],
        }
    }

    pub fn inner(&self) -> [f32; N_XYZ_COORDINATES] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.inner().iter().all(|v| v.is_finite())
    }
}

impl From<[f32; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f32; N_XYZ_COORDINATES]) -> Self {
        Self::new(value)
    }
}

impl From<XYZ> for [f32; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

/// Takes the first three components; hardware events may carry extra trailing values.
impl TryFrom<&[f32]> for XYZ {
    type Error = &'static str;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        if value.len() < N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self::new([value[0], value[1], value[2]]))
    }
}
