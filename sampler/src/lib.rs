//! # Crate sampler-rs
//!
//! ## sampler-rs
//!
//! The `sampler-rs` crate converts latest-value sensor state into timestamped,
//! rate-controlled sample streams for the duration of a session.
//!
//! Features include:
//! - Independent periodic timers per channel group: heart-rate, and a combined
//!   rotation + accelerometer + gyroscope (IMU) group.
//! - Timestamps relative to session start, taken from a monotonic clock.
//! - Per-session buffers that can be emptied into a [`SampleSet`] in one step.
//! - Cooperative cancellation: once [`SamplerHandle::stop`] returns, nothing else is appended.
//!
//! **NOTE** Hardware subscription is not handled here. Something else must keep the
//! [`common::SensorStateStore`] up to date.

pub mod buffer;
pub mod errors;
pub mod pipeline;

pub use buffer::{BufferLengths, SampleSet, SessionBuffers};
pub use errors::SamplerError;
pub use pipeline::{period_from_hz, ChannelGroup, RateLimitedSampler, SamplerHandle};
