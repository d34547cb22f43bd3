//! Module errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// Sampling timers can only be attached to a running session.
    #[error("session is not running")]
    NotRunning,
}
