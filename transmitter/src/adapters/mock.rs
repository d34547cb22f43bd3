// In-memory collector that records what it is sent. Used by tests and the demo.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use common::SessionSnapshot;

use crate::errors::TransmitError;
use crate::ports::CollectorPort;

#[derive(Debug, Default)]
pub struct CollectorMock {
    starts: AtomicUsize,
    sessions: Mutex<Vec<SessionSnapshot>>,
    fail: AtomicBool,
}

impl CollectorMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose `/end` submissions fail with a transport error.
    pub fn failing() -> Self {
        let mock = Self::default();
        mock.set_failing(true);
        mock
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    /// Snapshots accepted so far, oldest first.
    pub fn sessions(&self) -> Vec<SessionSnapshot> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn session_count(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl CollectorPort for CollectorMock {
    async fn send_session_start(&self) -> Result<(), TransmitError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn send_session_end(&self, snapshot: &SessionSnapshot) -> Result<(), TransmitError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransmitError::Transport("connection refused".to_string()));
        }
        snapshot.validate()?;
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        Ok(())
    }
}
