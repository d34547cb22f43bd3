use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use common::constants::MILLIS_PER_SECOND;
use common::{Clock, SessionEvent};
use publisher::{Publishable, Publisher};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Formats whole seconds as `HH:MM:SS`. Hours are not wrapped.
///
/// # Examples
///
/// ```
/// use session_rs::format_elapsed_time;
///
/// assert_eq!(format_elapsed_time(3725), "01:02:05");
/// ```
pub fn format_elapsed_time(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Periodic refresh of the elapsed-time readout of a running session.
///
/// Every `refresh` the shared counter is set to the time since start, and an
/// [`SessionEvent::Elapsed`] is published whenever the whole-second value changes.
pub(crate) struct ElapsedDisplay {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ElapsedDisplay {
    pub(crate) fn spawn(
        started_at: Clock,
        refresh: Duration,
        elapsed_millis: Arc<AtomicU64>,
        publisher: Publisher<SessionEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        elapsed_millis.store(0, Ordering::SeqCst);

        let task = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                let mut ticker = interval_at(started_at.instant() + refresh, refresh);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                let mut shown_seconds = 0;
                loop {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => break,
                        _ = ticker.tick() => {
                            let millis = Clock::now().millis_since(&started_at);
                            elapsed_millis.store(millis, Ordering::SeqCst);
                            let seconds = millis / MILLIS_PER_SECOND;
                            if seconds != shown_seconds {
                                shown_seconds = seconds;
                                publisher.notify_listeners(Arc::new(SessionEvent::Elapsed { millis }));
                            }
                        }
                    }
                }
                debug!("Elapsed-time display stopped");
            }
        });

        Self {
            cancel,
            task: Some(task),
        }
    }

    pub(crate) async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                error!("Elapsed-time display task failed: {}", e);
            }
        }
    }
}

impl Drop for ElapsedDisplay {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
