use async_trait::async_trait;

use common::SessionSnapshot;

use crate::errors::TransmitError;

/// Remote end of a session: told when a session starts, handed the record when it ends.
#[async_trait]
pub trait CollectorPort: Send + Sync {
    /// Announces a new session. Best effort, the caller ignores the outcome.
    async fn send_session_start(&self) -> Result<(), TransmitError>;

    /// Submits the full record of a finished session exactly once.
    /// Returns Transport, Status or Serialization errors; there is no retry.
    async fn send_session_end(&self, snapshot: &SessionSnapshot) -> Result<(), TransmitError>;
}
