use serde::{Deserialize, Serialize};

use crate::constants::{N_ROTATION_COORDINATES, N_XYZ_COORDINATES};

/// Orientation reading from the rotation-vector sensor.
///
/// Carries no timestamp: each one is index-aligned with the `ImuSample`
/// appended on the same sampler tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl RotationSample {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn inner(&self) -> [f32; N_ROTATION_COORDINATES] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn is_finite(&self) -> bool {
        self.inner().iter().all(|v| v.is_finite())
    }
}

/// Identity orientation, reported until the first rotation event arrives.
impl Default for RotationSample {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Needs at least x, y and z. A missing scalar component reads as 0.
impl TryFrom<&[f32]> for RotationSample {
    type Error = &'static str;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        if value.len() < N_XYZ_COORDINATES {
            return Err("Can't convert to RotationSample");
        }
        let w = value.get(N_XYZ_COORDINATES).copied().unwrap_or(0.0);
        Ok(Self::new(value[0], value[1], value[2], w))
    }
}
