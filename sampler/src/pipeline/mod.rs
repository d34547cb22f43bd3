pub mod channel;

pub use channel::{period_from_hz, ChannelGroup};

use log::{debug, error, info};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, timeout_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use common::{Clock, SensorStateStore, SessionState};

use crate::buffer::SessionBuffers;
use crate::errors::SamplerError;

/// Turns latest-value sensor state into rate-controlled sample streams.
///
/// Each channel group runs its own periodic task. Ticks are scheduled at a
/// fixed rate anchored at session start, so the n-th tick is due at
/// `started_at + n * period` and is stamped with that offset; the first one
/// fires one period in, never at t=0. Ticks missed while the runtime was busy
/// are caught up in a burst, keeping the sample count at `elapsed / period`.
#[derive(Clone)]
pub struct RateLimitedSampler {
    sensors: Arc<SensorStateStore>,
    buffers: Arc<SessionBuffers>,
    heart_rate_period: Option<Duration>,
    imu_period: Option<Duration>,
}

impl RateLimitedSampler {
    /// A rate of zero disables that channel group.
    pub fn new(
        sensors: Arc<SensorStateStore>,
        buffers: Arc<SessionBuffers>,
        heart_rate_hz: f64,
        imu_hz: u32,
    ) -> Self {
        Self {
            sensors,
            buffers,
            heart_rate_period: period_from_hz(heart_rate_hz),
            imu_period: period_from_hz(f64::from(imu_hz)),
        }
    }

    pub fn buffers(&self) -> Arc<SessionBuffers> {
        self.buffers.clone()
    }

    pub fn period(&self, group: ChannelGroup) -> Option<Duration> {
        match group {
            ChannelGroup::HeartRate => self.heart_rate_period,
            ChannelGroup::Imu => self.imu_period,
        }
    }

    /// Starts one sampling task per enabled channel group for the given session.
    ///
    /// Returns NotRunning if the session has not been started.
    pub fn activate(&self, session: &SessionState) -> Result<SamplerHandle, SamplerError> {
        let started_at = match (session.is_running(), session.started_at()) {
            (true, Some(started_at)) => started_at,
            _ => return Err(SamplerError::NotRunning),
        };

        let cancel = CancellationToken::new();
        let stop_at = Arc::new(OnceLock::new());
        let mut tasks = Vec::with_capacity(2);
        for group in [ChannelGroup::HeartRate, ChannelGroup::Imu] {
            let Some(period) = self.period(group) else {
                info!("Sampling of {} channels disabled", group);
                continue;
            };
            tasks.push(tokio::spawn(run_channel(
                group,
                period,
                started_at,
                cancel.clone(),
                stop_at.clone(),
                self.sensors.clone(),
                self.buffers.clone(),
            )));
        }

        Ok(SamplerHandle {
            cancel,
            stop_at,
            tasks,
        })
    }
}

async fn run_channel(
    group: ChannelGroup,
    period: Duration,
    started_at: Clock,
    cancel: CancellationToken,
    stop_at: Arc<OnceLock<Clock>>,
    sensors: Arc<SensorStateStore>,
    buffers: Arc<SessionBuffers>,
) {
    let mut ticker = interval_at(started_at.instant() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    debug!("Sampling {} every {:?}", group, period);

    let offset = |due: Instant| Clock::from_instant(due).millis_since(&started_at);
    let mut ticks: u64 = 0;
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            due = ticker.tick() => {
                group.sample(offset(due), &sensors, &buffers).await;
                ticks += 1;
            }
        }
    }

    // Ticks due at or before the stop instant still belong to the session.
    if let Some(stop_at) = stop_at.get() {
        let deadline = stop_at.instant();
        while let Ok(due) = timeout_at(deadline, ticker.tick()).await {
            if due > deadline {
                break;
            }
            group.sample(offset(due), &sensors, &buffers).await;
            ticks += 1;
        }
    }
    debug!("Stopped sampling {} after {} ticks", group, ticks);
}

/// Running sampler tasks of one session.
///
/// Dropping the handle cancels the tasks without waiting for them.
pub struct SamplerHandle {
    cancel: CancellationToken,
    stop_at: Arc<OnceLock<Clock>>,
    tasks: Vec<JoinHandle<()>>,
}

impl SamplerHandle {
    pub fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Ends sampling at `stop_at` and waits until every task has exited.
    ///
    /// Ticks due at or before `stop_at` are still appended, later ones are
    /// dropped. Once this returns no further sample can be appended, so the
    /// buffers can be snapshotted.
    pub async fn stop(mut self, stop_at: Clock) {
        let _ = self.stop_at.set(stop_at);
        self.cancel.cancel();
        for task in std::mem::take(&mut self.tasks) {
            if let Err(e) = task.await {
                error!("Sampling task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
