//! Helpers shared by the workspace tests and demos: a synthetic sensor feed
//! and a loader/replayer for recorded sensor traces.

pub mod csv_loader;
pub mod gaussian;
pub mod sensor_feed;

pub use csv_loader::{load_sensor_trace, parse_sensor_trace, TimedSensorEvent};
pub use gaussian::GaussianNoise;
pub use sensor_feed::{spawn_replay, spawn_synthetic_feed, SyntheticFeed};
