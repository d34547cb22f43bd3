/// Heart-rate sampling frequency. 0.1 Hz is six readings per minute.
pub const HEART_RATE_HZ: f64 = 0.1;
/// Shared sampling frequency for rotation, accelerometer and gyroscope.
pub const IMU_HZ: u32 = 20;
/// Refresh cadence of the elapsed-time display.
pub const ELAPSED_REFRESH_MILLIS: u64 = 200;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

pub const N_XYZ_COORDINATES: usize = 3;
pub const N_ROTATION_COORDINATES: usize = 4;

pub const MILLIS_PER_SECOND: u64 = 1000;
