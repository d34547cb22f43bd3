pub mod latest_value;
pub mod sensor_event;
pub mod sensor_kind;
pub mod sensor_state;

pub use latest_value::LatestValue;
pub use sensor_event::SensorEvent;
pub use sensor_kind::SensorKind;
pub use sensor_state::SensorStateStore;
