//! # Configuration
//!
//! Settings of the session logger. Every field has a default, so a TOML file
//! only needs the keys it wants to override:
//!
//! ```toml
//! base_url = "http://192.168.1.20:5000"
//! heart_rate_hz = 0.1
//! imu_hz = 20
//! elapsed_refresh_millis = 200
//! request_timeout_secs = 15
//! notify_session_start = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use common::constants::{
    DEFAULT_BASE_URL, ELAPSED_REFRESH_MILLIS, HEART_RATE_HZ, IMU_HZ, REQUEST_TIMEOUT_SECS,
};

use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Collector root, `/start` and `/end` are appended to it.
    pub base_url: String,
    /// 0 disables heart-rate sampling.
    pub heart_rate_hz: f64,
    /// 0 disables rotation and IMU sampling.
    pub imu_hz: u32,
    pub elapsed_refresh_millis: u64,
    pub request_timeout_secs: u64,
    /// Send `GET /start` when a session begins.
    pub notify_session_start: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            heart_rate_hz: HEART_RATE_HZ,
            imu_hz: IMU_HZ,
            elapsed_refresh_millis: ELAPSED_REFRESH_MILLIS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            notify_session_start: true,
        }
    }
}

impl LoggerConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid("base_url is empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http(s) url, got {}",
                base_url
            )));
        }
        if !self.heart_rate_hz.is_finite() || self.heart_rate_hz < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "heart_rate_hz must be a finite rate >= 0, got {}",
                self.heart_rate_hz
            )));
        }
        if self.elapsed_refresh_millis == 0 {
            return Err(ConfigError::Invalid(
                "elapsed_refresh_millis must be > 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn elapsed_refresh(&self) -> Duration {
        Duration::from_millis(self.elapsed_refresh_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
