//! # Crate session-rs
//!
//! ## session-rs
//!
//! The `session-rs` crate ties the wearable logger together. A [`SessionController`]
//! starts and stops recording sessions, drives the rate-limited samplers while a
//! session runs, and hands each finished session to a collector exactly once.
//!
//! Features include:
//! - Start/stop lifecycle with rejected invalid transitions.
//! - Elapsed-time readout refreshed while running, formatted as `HH:MM:SS`.
//! - Session events (`Started`, `Elapsed`, `Stopped`) published to registered listeners.
//! - TOML configuration of collector url, sampling rates and timeouts.
//!
//! ### Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use common::{SensorEvent, SensorStateStore};
//! use session_rs::{run_http_session_controller, LoggerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sensors = Arc::new(SensorStateStore::new());
//!     let controller = run_http_session_controller(LoggerConfig::default(), sensors.clone()).unwrap();
//!
//!     controller.start().await.unwrap();
//!     sensors.apply(&SensorEvent::heart_rate(72.0));
//!     tokio::time::sleep(std::time::Duration::from_secs(30)).await;
//!     let summary = controller.stop().await.unwrap();
//!     println!("recorded {}s", summary.duration_seconds);
//! }
//! ```

pub mod config;
pub mod controller;
pub(crate) mod elapsed;
pub mod errors;
pub mod services;

pub use config::LoggerConfig;
pub use controller::{Delivery, SessionController, SessionSummary};
pub use elapsed::format_elapsed_time;
pub use errors::{ConfigError, SessionError};
pub use services::{run_http_session_controller, run_mock_session_controller};
