pub mod event;
pub mod snapshot;
pub mod state;

pub use event::SessionEvent;
pub use snapshot::SessionSnapshot;
pub use state::{SessionPhase, SessionState};
