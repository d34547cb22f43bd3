use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{
    HeartRateSample, SensorEvent, SensorStateStore, SessionEvent, SessionPhase, TimedSample,
};
use publisher::Listener;
use session_rs::{
    run_http_session_controller, run_mock_session_controller, ConfigError, LoggerConfig,
    SessionController, SessionError,
};
use test_utils::{load_sensor_trace, spawn_replay, spawn_synthetic_feed, SyntheticFeed};
use tokio_util::sync::CancellationToken;
use transmitter_rs::{wire, CollectorMock, TransmitError, Transmitter};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test(start_paused = true)]
async fn test_heart_rate_session_delivered() {
    init_logger();
    let sensors = Arc::new(SensorStateStore::new());
    let (controller, collector) =
        run_mock_session_controller(LoggerConfig::default(), sensors.clone()).unwrap();
    sensors.apply(&SensorEvent::heart_rate(72.0));

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(10_001)).await;
    let summary = controller.stop().await.unwrap();
    assert_eq!(summary.duration_seconds, 10);
    summary.delivery.outcome().await.unwrap();

    let sessions = collector.sessions();
    assert_eq!(sessions.len(), 1);
    let session = &sessions[0];
    assert_eq!(session.heart_rates, vec![HeartRateSample::new(10_000, 72)]);
    assert_eq!(session.duration_seconds, 10);
    assert_eq!(session.heart_rate_hz, 0.1);
    assert_eq!(session.imu_hz, 20);
    assert_eq!(session.imu.len(), 200);
    assert_eq!(session.rotations.len(), session.imu.len());
}

#[tokio::test(start_paused = true)]
async fn test_stop_at_exact_heart_rate_period_keeps_sample() {
    init_logger();
    let sensors = Arc::new(SensorStateStore::new());
    let (controller, collector) =
        run_mock_session_controller(LoggerConfig::default(), sensors.clone()).unwrap();
    sensors.apply(&SensorEvent::heart_rate(72.0));

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(10_000)).await;
    let summary = controller.stop().await.unwrap();
    summary.delivery.outcome().await.unwrap();

    let session = &collector.sessions()[0];
    assert_eq!(session.duration_seconds, 10);
    assert_eq!(session.heart_rates, vec![HeartRateSample::new(10_000, 72)]);
    assert_eq!(session.imu.len(), 200);
    assert_eq!(session.imu.last().unwrap().t, 10_000);
}

#[tokio::test(start_paused = true)]
async fn test_stop_at_exact_imu_periods() {
    init_logger();
    let sensors = Arc::new(SensorStateStore::new());
    let (controller, collector) =
        run_mock_session_controller(LoggerConfig::default(), sensors.clone()).unwrap();
    sensors.apply(&SensorEvent::accelerometer(0.0, 0.0, 9.81));

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let summary = controller.stop().await.unwrap();
    assert_eq!(summary.imu_samples, 1);
    summary.delivery.outcome().await.unwrap();

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    let summary = controller.stop().await.unwrap();
    assert_eq!(summary.imu_samples, 2);
    summary.delivery.outcome().await.unwrap();

    let sessions = collector.sessions();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].imu.iter().map(|s| s.t).collect::<Vec<_>>(), vec![50]);
    assert_eq!(
        sessions[1].imu.iter().map(|s| s.t).collect::<Vec<_>>(),
        vec![50, 100]
    );
    assert_eq!(sessions[1].rotations.len(), 2);
}

#[test]
fn test_invalid_config_rejected() {
    init_logger();
    let result = SessionController::new(
        LoggerConfig {
            heart_rate_hz: f64::NAN,
            ..LoggerConfig::default()
        },
        Transmitter::from_shared(Arc::new(CollectorMock::new())),
    );
    assert!(matches!(
        result,
        Err(SessionError::Config(ConfigError::Invalid(_)))
    ));

    let result = run_mock_session_controller(
        LoggerConfig {
            base_url: String::new(),
            ..LoggerConfig::default()
        },
        Arc::new(SensorStateStore::new()),
    );
    assert!(matches!(
        result,
        Err(SessionError::Config(ConfigError::Invalid(_)))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_double_stop_sends_once() {
    init_logger();
    let (controller, collector) =
        run_mock_session_controller(LoggerConfig::default(), Arc::new(SensorStateStore::new()))
            .unwrap();

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(510)).await;
    let summary = controller.stop().await.unwrap();
    let second = controller.stop().await;

    assert!(matches!(
        second,
        Err(SessionError::InvalidStateTransition {
            from: SessionPhase::Idle,
            ..
        })
    ));
    summary.delivery.outcome().await.unwrap();
    assert_eq!(collector.session_count(), 1);
    assert_eq!(collector.sessions()[0].imu.len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_failed_delivery_leaves_controller_idle() {
    init_logger();
    let collector = Arc::new(CollectorMock::failing());
    let controller = SessionController::new(
        LoggerConfig::default(),
        Transmitter::from_shared(collector.clone()),
    )
    .unwrap();

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    let summary = controller.stop().await.unwrap();

    assert!(!controller.is_running().await);
    assert!(matches!(
        summary.delivery.outcome().await,
        Err(TransmitError::Transport(_))
    ));

    // a new session can be recorded right away, starting from empty buffers
    collector.set_failing(false);
    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    let summary = controller.stop().await.unwrap();
    summary.delivery.outcome().await.unwrap();

    let sessions = collector.sessions();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].imu.len(), 1);
    assert_eq!(sessions[0].imu[0].t, 50);
}

#[tokio::test(start_paused = true)]
async fn test_session_events_published() {
    init_logger();
    let (controller, _collector) =
        run_mock_session_controller(LoggerConfig::default(), Arc::new(SensorStateStore::new()))
            .unwrap();
    let events = Arc::new(Mutex::new(Vec::new()));
    let listener_id = controller.subscribe(&mut Listener::new({
        let events = events.clone();
        move |_id, event: Arc<SessionEvent>| events.lock().unwrap().push((*event).clone())
    }));

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(2_110)).await;
    controller.stop().await.unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            SessionEvent::Started,
            SessionEvent::Elapsed { millis: 1_000 },
            SessionEvent::Elapsed { millis: 2_000 },
            SessionEvent::Stopped {
                duration_seconds: 2,
                heart_rate_samples: 0,
                imu_samples: 42,
            },
        ]
    );

    assert!(controller.unsubscribe(listener_id));
    controller.start().await.unwrap();
    assert_eq!(events.lock().unwrap().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_synthetic_feed_session() {
    init_logger();
    let sensors = Arc::new(SensorStateStore::new());
    let (controller, collector) =
        run_mock_session_controller(LoggerConfig::default(), sensors.clone()).unwrap();
    let cancel = CancellationToken::new();
    let feed = spawn_synthetic_feed(
        sensors.clone(),
        SyntheticFeed::constant(68.0),
        Duration::from_millis(20),
        cancel.clone(),
    );

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(35_010)).await;
    let summary = controller.stop().await.unwrap();
    cancel.cancel();
    feed.await.unwrap();
    summary.delivery.outcome().await.unwrap();

    let session = &collector.sessions()[0];
    assert_eq!(session.duration_seconds, 35);
    assert_eq!(session.heart_rates.len(), 3);
    assert!(session.heart_rates.iter().all(|s| s.bpm == 68));
    assert_eq!(session.imu.len(), 700);
    assert_eq!(session.rotations.len(), 700);
    assert!(session.imu.iter().all(|s| s.az == 9.81));
    assert!(session.imu.first().unwrap().get_timestamp_millis() > 0);
    assert!(session
        .imu
        .windows(2)
        .all(|w| w[0].get_timestamp_millis() <= w[1].get_timestamp_millis()));
}

#[tokio::test(start_paused = true)]
async fn test_replayed_trace_session() {
    init_logger();
    let trace = load_sensor_trace(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../test-utils/test_data/sensor_trace.csv"
    ))
    .unwrap();
    let sensors = Arc::new(SensorStateStore::new());
    let config = LoggerConfig {
        heart_rate_hz: 1.0,
        ..LoggerConfig::default()
    };
    let (controller, collector) = run_mock_session_controller(config, sensors.clone()).unwrap();

    controller.start().await.unwrap();
    let replay = spawn_replay(sensors.clone(), trace, CancellationToken::new());
    tokio::time::sleep(Duration::from_millis(2_010)).await;
    assert_eq!(replay.await.unwrap(), 17);
    let summary = controller.stop().await.unwrap();
    summary.delivery.outcome().await.unwrap();

    let session = &collector.sessions()[0];
    assert_eq!(session.heart_rate_hz, 1.0);
    assert_eq!(session.heart_rates.len(), 2);
    // the trace switches to 74 bpm on the same millisecond as the first tick
    assert_eq!(session.heart_rates[0].t, 1_000);
    assert!([70, 74].contains(&session.heart_rates[0].bpm));
    assert_eq!(session.heart_rates[1], HeartRateSample::new(2_000, 74));
    assert_eq!(session.imu.last().unwrap().az, 9.81);
}

#[tokio::test]
async fn test_http_session_round_trip() {
    init_logger();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/end"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = LoggerConfig {
        base_url: mock_server.uri(),
        request_timeout_secs: 5,
        ..LoggerConfig::default()
    };
    let sensors = Arc::new(SensorStateStore::new());
    let controller = run_http_session_controller(config, sensors.clone()).unwrap();
    sensors.apply(&SensorEvent::accelerometer(0.0, 0.0, 9.81));

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    let summary = controller.stop().await.unwrap();
    summary.delivery.outcome().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let end = requests
        .iter()
        .find(|r| r.url.path() == "/end")
        .expect("no /end request");
    let session = wire::decode_session(&end.body).unwrap();
    assert_eq!(session.duration_seconds, 0);
    assert_eq!(session.imu.len(), summary.imu_samples);
    assert_eq!(session.rotations.len(), session.imu.len());
    assert!(!session.imu.is_empty());
}

#[tokio::test]
async fn test_unreachable_collector_does_not_block_stop() {
    init_logger();
    let config = LoggerConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_secs: 1,
        notify_session_start: false,
        ..LoggerConfig::default()
    };
    let controller = run_http_session_controller(config, Arc::new(SensorStateStore::new())).unwrap();

    controller.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    let summary = controller.stop().await.unwrap();
    assert!(!controller.is_running().await);

    let result = summary.delivery.outcome().await;
    assert!(matches!(result, Err(TransmitError::Transport(_))));
}
