use std::sync::Arc;

use common::SensorStateStore;
use transmitter_rs::{http_transmitter, Collector, CollectorMock, Transmitter};

use crate::config::LoggerConfig;
use crate::controller::SessionController;
use crate::errors::SessionError;

/// Builds a session controller that delivers sessions to the HTTP collector
/// at `config.base_url`, reading from the given sensor store.
///
/// An error Config is returned if the configuration is invalid, and
/// Transmit(ClientBuild) if the HTTP client cannot be created.
pub fn run_http_session_controller(
    config: LoggerConfig,
    sensors: Arc<SensorStateStore>,
) -> Result<Arc<SessionController<Collector>>, SessionError> {
    config.validate()?;
    let transmitter = http_transmitter(&config.base_url, config.request_timeout())?;
    log::info!("Sessions will be delivered to {}", config.base_url);
    Ok(Arc::new(SessionController::with_sensors(
        config,
        sensors,
        transmitter,
    )?))
}

/// Builds a session controller whose sessions are kept in memory.
///
/// The recorded sessions are available from the returned collector.
pub fn run_mock_session_controller(
    config: LoggerConfig,
    sensors: Arc<SensorStateStore>,
) -> Result<(Arc<SessionController<CollectorMock>>, Arc<CollectorMock>), SessionError> {
    config.validate()?;
    let collector = Arc::new(CollectorMock::new());
    let transmitter = Transmitter::from_shared(collector.clone());
    let controller = Arc::new(SessionController::with_sensors(config, sensors, transmitter)?);
    Ok((controller, collector))
}
