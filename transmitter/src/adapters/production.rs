// HTTP collector. `/start` is a bare GET, `/end` a JSON POST carrying the session record.

use async_trait::async_trait;
use std::time::Duration;

use common::SessionSnapshot;

use crate::errors::TransmitError;
use crate::http_client::HttpClient;
use crate::ports::CollectorPort;
use crate::wire;

/// Constants for HTTP endpoints
pub const START_PATH: &str = "/start";
pub const END_PATH: &str = "/end";

pub struct Collector {
    client: HttpClient,
}

impl Collector {
    /// Returns a ClientBuild error if the HTTP client cannot be created.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransmitError> {
        let client = HttpClient::new(base_url, timeout)?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl CollectorPort for Collector {
    async fn send_session_start(&self) -> Result<(), TransmitError> {
        log::debug!("Announcing session start to {}", self.base_url());
        self.client.get(START_PATH).await
    }

    async fn send_session_end(&self, snapshot: &SessionSnapshot) -> Result<(), TransmitError> {
        let body = wire::encode_session(snapshot)?;
        log::debug!(
            "Sending session of {}s ({} bytes) to {}",
            snapshot.duration_seconds,
            body.len(),
            self.base_url()
        );
        self.client.post_json(END_PATH, body).await
    }
}
