use log::{info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use common::constants::MILLIS_PER_SECOND;
use common::{
    Clock, Notifiable, SensorEvent, SensorStateStore, SessionEvent, SessionPhase,
    SessionSnapshot, SessionState,
};
use publisher::{Publishable, Publisher};
use sampler_rs::{BufferLengths, RateLimitedSampler, SamplerHandle, SessionBuffers};
use transmitter_rs::{CollectorPort, TransmitError, Transmitter};

use crate::config::LoggerConfig;
use crate::elapsed::{format_elapsed_time, ElapsedDisplay};
use crate::errors::SessionError;

/// Pending delivery of a stopped session to the collector.
///
/// Dropping it leaves the transmission running in the background.
#[derive(Debug)]
pub struct Delivery {
    handle: JoinHandle<Result<(), TransmitError>>,
}

impl Delivery {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the single send attempt and returns its outcome.
    pub async fn outcome(self) -> Result<(), TransmitError> {
        self.handle
            .await
            .map_err(|e| TransmitError::Transport(format!("delivery task failed: {}", e)))?
    }
}

/// What `stop` recorded and handed to the transmitter.
#[derive(Debug)]
pub struct SessionSummary {
    pub duration_seconds: u64,
    pub heart_rate_samples: usize,
    pub imu_samples: usize,
    pub delivery: Delivery,
}

#[derive(Default)]
struct Running {
    state: SessionState,
    sampler: Option<SamplerHandle>,
    display: Option<ElapsedDisplay>,
}

/// Owns the session lifecycle: idle → running → idle.
///
/// Starting activates the samplers and the elapsed-time display. Stopping
/// waits for the samplers to wind down, moves the buffered samples into a
/// snapshot and hands it to the transmitter without waiting for the network.
/// Lifecycle calls are serialized, so a stop never overlaps a start.
pub struct SessionController<C>
where
    C: CollectorPort,
{
    config: LoggerConfig,
    sensors: Arc<SensorStateStore>,
    sampler: RateLimitedSampler,
    transmitter: Transmitter<C>,
    publisher: Publisher<SessionEvent>,
    running: Mutex<Running>,
    elapsed_millis: Arc<AtomicU64>,
}

impl<C> SessionController<C>
where
    C: CollectorPort + 'static,
{
    pub fn new(config: LoggerConfig, transmitter: Transmitter<C>) -> Result<Self, SessionError> {
        Self::with_sensors(config, Arc::new(SensorStateStore::new()), transmitter)
    }

    /// Controller reading from an existing sensor store.
    ///
    /// Fails with [`SessionError::Config`] if the configuration is invalid.
    pub fn with_sensors(
        config: LoggerConfig,
        sensors: Arc<SensorStateStore>,
        transmitter: Transmitter<C>,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let sampler = RateLimitedSampler::new(
            sensors.clone(),
            Arc::new(SessionBuffers::new()),
            config.heart_rate_hz,
            config.imu_hz,
        );
        Ok(Self {
            config,
            sensors,
            sampler,
            transmitter,
            publisher: Publisher::new(),
            running: Mutex::new(Running::default()),
            elapsed_millis: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn sensors(&self) -> Arc<SensorStateStore> {
        self.sensors.clone()
    }

    pub fn transmitter(&self) -> &Transmitter<C> {
        &self.transmitter
    }

    /// Forwards a hardware reading to the sensor store.
    /// Returns false if the event was malformed and ignored.
    pub fn ingest(&self, event: &SensorEvent) -> bool {
        self.sensors.apply(event)
    }

    /// Starts a session.
    ///
    /// Returns InvalidStateTransition, leaving the current session untouched,
    /// if one is already running.
    pub async fn start(&self) -> Result<(), SessionError> {
        let mut running = self.running.lock().await;
        if running.state.is_running() {
            return Err(SessionError::InvalidStateTransition {
                from: SessionPhase::Running,
                attempted: "start",
            });
        }

        let state = SessionState::running(Clock::now());
        let sampler = self.sampler.activate(&state)?;
        let display = state.started_at().map(|started_at| {
            ElapsedDisplay::spawn(
                started_at,
                self.config.elapsed_refresh(),
                self.elapsed_millis.clone(),
                self.publisher.clone(),
            )
        });

        running.state = state;
        running.sampler = Some(sampler);
        running.display = display;

        if self.config.notify_session_start {
            self.transmitter.dispatch_session_start();
        }
        info!("Session started");
        self.publisher.notify_listeners(Arc::new(SessionEvent::Started));
        Ok(())
    }

    /// Stops the running session and dispatches its snapshot.
    ///
    /// Returns once the buffers have been emptied; delivery continues in the
    /// background and can be followed through [`SessionSummary::delivery`].
    /// Returns InvalidStateTransition if no session is running, in which case
    /// nothing is cleared or sent.
    pub async fn stop(&self) -> Result<SessionSummary, SessionError> {
        let mut running = self.running.lock().await;
        let started_at = match (running.state.is_running(), running.state.started_at()) {
            (true, Some(started_at)) => started_at,
            _ => {
                return Err(SessionError::InvalidStateTransition {
                    from: SessionPhase::Idle,
                    attempted: "stop",
                })
            }
        };
        let stopped_at = Clock::now();
        let duration_seconds = stopped_at.millis_since(&started_at) / MILLIS_PER_SECOND;

        if let Some(sampler) = running.sampler.take() {
            sampler.stop(stopped_at).await;
        }
        if let Some(display) = running.display.take() {
            display.stop().await;
        }
        let samples = self.sampler.buffers().clone_and_clear().await;
        running.state = SessionState::idle();
        self.elapsed_millis.store(0, Ordering::SeqCst);
        drop(running);

        let heart_rate_samples = samples.heart_rates.len();
        let imu_samples = samples.imu.len();
        if samples.rotations.len() != imu_samples {
            warn!(
                "Rotation and IMU buffers diverged: {} vs {}",
                samples.rotations.len(),
                imu_samples
            );
        }
        let snapshot = SessionSnapshot::new(
            samples.heart_rates,
            samples.rotations,
            samples.imu,
            duration_seconds,
            self.config.heart_rate_hz,
            self.config.imu_hz,
        );
        info!(
            "Session stopped after {}s with {} heart-rate and {} imu samples",
            duration_seconds, heart_rate_samples, imu_samples
        );
        let delivery = Delivery {
            handle: self.transmitter.dispatch_session_end(snapshot),
        };

        self.publisher
            .notify_listeners(Arc::new(SessionEvent::Stopped {
                duration_seconds,
                heart_rate_samples,
                imu_samples,
            }));

        Ok(SessionSummary {
            duration_seconds,
            heart_rate_samples,
            imu_samples,
            delivery,
        })
    }

    pub async fn state(&self) -> SessionState {
        self.running.lock().await.state
    }

    pub async fn is_running(&self) -> bool {
        self.state().await.is_running()
    }

    /// Samples collected so far in the running session.
    pub async fn buffered(&self) -> BufferLengths {
        self.sampler.buffers().lengths().await
    }

    /// Elapsed time as last refreshed by the display; 0 while idle.
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis.load(Ordering::SeqCst)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_millis() / MILLIS_PER_SECOND
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed_time(self.elapsed_seconds())
    }

    pub fn subscribe(&self, listener: &mut dyn Notifiable<SessionEvent>) -> Uuid {
        self.publisher.register_listener(listener)
    }

    pub fn unsubscribe(&self, listener_id: Uuid) -> bool {
        self.publisher.unregister_listener(listener_id)
    }
}
