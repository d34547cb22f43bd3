//! Module errors

use thiserror::Error;

/// Reasons a session snapshot cannot be put on the wire.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// A sample carries NaN or an infinite value.
    #[error("non-finite value in {buffer} sample {index}")]
    NonFinite { buffer: &'static str, index: usize },

    /// Timestamps went backwards inside one buffer.
    #[error("timestamp decreases in {buffer} at sample {index}")]
    DecreasingTimestamp { buffer: &'static str, index: usize },

    /// Rotation and IMU buffers are appended on the same tick and must stay index-aligned.
    #[error("rotation buffer has {rotations} samples but imu buffer has {imu}")]
    MisalignedMotion { rotations: usize, imu: usize },

    /// A rate constant is not finite.
    #[error("invalid sampling rate: {0}")]
    InvalidRate(String),
}
