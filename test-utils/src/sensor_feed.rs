// Stand-ins for the hardware layer: they keep a SensorStateStore updated
// the way real sensor callbacks would.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use common::{SensorEvent, SensorStateStore};

use crate::csv_loader::TimedSensorEvent;
use crate::gaussian::GaussianNoise;

const GRAVITY: f32 = 9.81;

/// Generates plausible readings for a wearer at rest: a steady heart rate,
/// identity orientation and gravity on the z axis, all with Gaussian noise.
pub struct SyntheticFeed {
    rng: StdRng,
    noise: Option<GaussianNoise>,
    resting_bpm: f32,
}

impl SyntheticFeed {
    pub fn new(resting_bpm: f32, noise: Option<GaussianNoise>, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            noise,
            resting_bpm,
        }
    }

    /// Feed without noise, handy when exact values are asserted.
    pub fn constant(resting_bpm: f32) -> Self {
        Self::new(resting_bpm, None, 0)
    }

    fn perturb(&mut self, data: &[f32]) -> Vec<f32> {
        match &self.noise {
            Some(noise) => noise.add_noise_vec(&mut self.rng, data),
            None => data.to_vec(),
        }
    }

    /// One event per channel.
    pub fn next_events(&mut self) -> Vec<SensorEvent> {
        let bpm = self.perturb(&[self.resting_bpm]);
        let rotation = self.perturb(&[0.0, 0.0, 0.0]);
        let acceleration = self.perturb(&[0.0, 0.0, GRAVITY]);
        let angular_velocity = self.perturb(&[0.0, 0.0, 0.0]);

        vec![
            SensorEvent::heart_rate(bpm[0]),
            SensorEvent::rotation(rotation[0], rotation[1], rotation[2], 1.0),
            SensorEvent::accelerometer(acceleration[0], acceleration[1], acceleration[2]),
            SensorEvent::gyroscope(angular_velocity[0], angular_velocity[1], angular_velocity[2]),
        ]
    }
}

/// Applies a fresh batch of synthetic events every `period` until cancelled.
///
/// The task returns the number of events applied.
pub fn spawn_synthetic_feed(
    sensors: Arc<SensorStateStore>,
    mut feed: SyntheticFeed,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        let mut applied = 0;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    for event in feed.next_events() {
                        if sensors.apply(&event) {
                            applied += 1;
                        }
                    }
                }
            }
        }
        log::debug!("Synthetic feed applied {} events", applied);
        applied
    })
}

/// Replays a recorded trace against the store, honouring its relative timestamps.
///
/// Events that the store rejects are skipped with a warning. The task returns
/// the number of events applied.
pub fn spawn_replay(
    sensors: Arc<SensorStateStore>,
    events: Vec<TimedSensorEvent>,
    cancel: CancellationToken,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let started_at = tokio::time::Instant::now();
        let mut applied = 0;
        for timed in events {
            let due = started_at + Duration::from_millis(timed.t_ms);
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep_until(due) => {
                    if sensors.apply(&timed.event) {
                        applied += 1;
                    } else {
                        log::warn!("Skipping malformed {} event at {} ms", timed.event.kind, timed.t_ms);
                    }
                }
            }
        }
        applied
    })
}
