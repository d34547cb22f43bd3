//! General functionality for the wearable session logger.
//!
//! Holds the sample data model shared by the sampler, the transmitter and the
//! session controller, the latest-value sensor store written by hardware
//! callbacks, and the monotonic clock every relative timestamp is derived from.

pub mod constants;
pub mod errors;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{Notifiable, TimedSample};

// Re-export types
#[doc(inline)]
pub use errors::SnapshotError;
#[doc(inline)]
pub use types::{
    Callback, Clock, HeartRateSample, ImuSample, LatestValue, RotationSample, SensorEvent,
    SensorKind, SensorStateStore, SessionEvent, SessionPhase, SessionSnapshot, SessionState, XYZ,
};
