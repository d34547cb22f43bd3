use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use common::SessionSnapshot;

use crate::adapters::{mock::CollectorMock, production::Collector};
use crate::errors::TransmitError;
use crate::ports::CollectorPort;

/// Hands session records to a collector without making the caller wait.
///
/// Every dispatch runs in its own detached task, and failures are logged there
/// and never reach the session lifecycle. Cloning shares the collector.
pub struct Transmitter<C>
where
    C: CollectorPort,
{
    collector: Arc<C>,
}

impl<C> Clone for Transmitter<C>
where
    C: CollectorPort,
{
    fn clone(&self) -> Self {
        Self {
            collector: self.collector.clone(),
        }
    }
}

impl<C> Transmitter<C>
where
    C: CollectorPort + 'static,
{
    pub fn new(collector: C) -> Self {
        Self {
            collector: Arc::new(collector),
        }
    }

    pub fn from_shared(collector: Arc<C>) -> Self {
        Self { collector }
    }

    pub fn collector(&self) -> Arc<C> {
        self.collector.clone()
    }

    /// Fire-and-forget start notification.
    pub fn dispatch_session_start(&self) -> JoinHandle<()> {
        let collector = self.collector.clone();
        tokio::spawn(async move {
            if let Err(e) = collector.send_session_start().await {
                warn!("Session start notification failed: {}", e);
            }
        })
    }

    /// Sends the snapshot in a detached task and returns at once.
    ///
    /// The snapshot is moved into the task and dropped once the single attempt
    /// completes. Awaiting the handle is optional and only exposes the outcome.
    pub fn dispatch_session_end(
        &self,
        snapshot: SessionSnapshot,
    ) -> JoinHandle<Result<(), TransmitError>> {
        let collector = self.collector.clone();
        tokio::spawn(async move {
            let result = collector.send_session_end(&snapshot).await;
            match &result {
                Ok(()) => info!(
                    "Session of {}s delivered ({} heart-rate, {} imu samples)",
                    snapshot.duration_seconds,
                    snapshot.heart_rates.len(),
                    snapshot.imu.len()
                ),
                Err(e) => error!(
                    "Session of {}s could not be delivered: {}",
                    snapshot.duration_seconds, e
                ),
            }
            result
        })
    }
}

/// Builds a transmitter talking to the HTTP collector at `base_url`.
///
/// An error ClientBuild is returned if the HTTP client cannot be created.
pub fn http_transmitter(
    base_url: &str,
    timeout: Duration,
) -> Result<Transmitter<Collector>, TransmitError> {
    let collector = Collector::new(base_url, timeout)?;
    Ok(Transmitter::new(collector))
}

/// Builds a transmitter that keeps every session in memory.
pub fn mock_transmitter() -> Transmitter<CollectorMock> {
    Transmitter::new(CollectorMock::new())
}
