pub mod heart_rate;
pub mod imu;

pub use heart_rate::HeartRateSample;
pub use imu::ImuSample;
