//! Module errors

use thiserror::Error;

use common::SnapshotError;

/// Failures of a single collector request. None of them is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransmitError {
    /// The HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Connection refused, DNS failure, timeout and any other transport level problem.
    #[error("transport error: {0}")]
    Transport(String),

    /// The collector answered with a non-2xx status.
    #[error("collector answered with status {0}")]
    Status(u16),

    /// The snapshot could not be turned into the wire payload.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<SnapshotError> for TransmitError {
    fn from(e: SnapshotError) -> Self {
        TransmitError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for TransmitError {
    fn from(e: serde_json::Error) -> Self {
        TransmitError::Serialization(e.to_string())
    }
}
