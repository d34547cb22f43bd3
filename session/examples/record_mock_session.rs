// Records one session from a synthetic sensor feed.
//
// cargo run --example record_mock_session                 -> sessions kept in memory
// cargo run --example record_mock_session -- logger.toml  -> sessions POSTed to the configured collector

use std::sync::Arc;
use std::time::Duration;

use common::{SensorStateStore, SessionEvent};
use publisher::Listener;
use session_rs::{run_http_session_controller, run_mock_session_controller, LoggerConfig};
use test_utils::{spawn_synthetic_feed, GaussianNoise, SyntheticFeed};
use tokio_util::sync::CancellationToken;

const RECORD_FOR_SECS: u64 = 12;
const FEED_PERIOD_MILLIS: u64 = 10;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config_path = std::env::args().nth(1);
    let config = match &config_path {
        Some(path) => match LoggerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        },
        None => LoggerConfig::default(),
    };

    let sensors = Arc::new(SensorStateStore::new());
    let cancel = CancellationToken::new();
    let noise = match GaussianNoise::new(0.0, 0.05) {
        Ok(noise) => noise,
        Err(e) => {
            log::error!("Invalid noise parameters: {}", e);
            return;
        }
    };
    let feed = spawn_synthetic_feed(
        sensors.clone(),
        SyntheticFeed::new(72.0, Some(noise), 1),
        Duration::from_millis(FEED_PERIOD_MILLIS),
        cancel.clone(),
    );

    let mut display = Listener::new(|_id, event: Arc<SessionEvent>| match *event {
        SessionEvent::Elapsed { millis } => {
            println!("{}", session_rs::format_elapsed_time(millis / 1000))
        }
        ref other => println!("{:?}", other),
    });

    let result = if config_path.is_some() {
        match run_http_session_controller(config, sensors) {
            Ok(controller) => {
                controller.subscribe(&mut display);
                record(&controller).await
            }
            Err(e) => Err(e),
        }
    } else {
        match run_mock_session_controller(config, sensors) {
            Ok((controller, collector)) => {
                controller.subscribe(&mut display);
                let result = record(&controller).await;
                for session in collector.sessions() {
                    println!(
                        "collected {}s: {} heart-rate, {} imu samples",
                        session.duration_seconds,
                        session.heart_rates.len(),
                        session.imu.len()
                    );
                }
                result
            }
            Err(e) => Err(e),
        }
    };

    cancel.cancel();
    let _ = feed.await;
    if let Err(e) = result {
        log::error!("Session failed: {}", e);
    }
}

async fn record<C>(
    controller: &session_rs::SessionController<C>,
) -> Result<(), session_rs::SessionError>
where
    C: transmitter_rs::CollectorPort + 'static,
{
    controller.start().await?;
    tokio::time::sleep(Duration::from_secs(RECORD_FOR_SECS)).await;
    let summary = controller.stop().await?;
    if let Err(e) = summary.delivery.outcome().await {
        log::warn!("Delivery failed: {}", e);
    }
    Ok(())
}
