pub mod callback;
pub mod clock;
pub mod sensors;
pub mod session;
pub mod timed;
pub mod untimed;

pub use callback::Callback;
pub use clock::Clock;
pub use sensors::{LatestValue, SensorEvent, SensorKind, SensorStateStore};
pub use session::{SessionEvent, SessionPhase, SessionSnapshot, SessionState};
pub use timed::{HeartRateSample, ImuSample};
pub use untimed::{RotationSample, XYZ};
