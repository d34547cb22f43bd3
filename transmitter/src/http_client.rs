use reqwest::header::CONTENT_TYPE;
use reqwest::Client as ReqwestClient;
use reqwest::Response;
use std::time::Duration;

use crate::errors::TransmitError;

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Thin wrapper over a reqwest client bound to one base url.
///
/// The underlying client is built once and reused for every request.
pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, TransmitError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransmitError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET without body. Any 2xx is a success, the response body is ignored.
    pub(crate) async fn get(&self, path: &str) -> Result<(), TransmitError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| TransmitError::Transport(e.to_string()))?;
        check_status(response)
    }

    /// POST of an already encoded JSON body.
    pub(crate) async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<(), TransmitError> {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TransmitError::Transport(e.to_string()))?;
        check_status(response)
    }
}

fn check_status(response: Response) -> Result<(), TransmitError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(TransmitError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_http_client_new_strips_trailing_slash() {
        let client = HttpClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/end"), "http://localhost:5000/end");
    }

    #[tokio::test]
    async fn test_http_client_get() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/start"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&mock_server.uri(), Duration::from_secs(1)).unwrap();
        assert_eq!(client.get("/start").await, Ok(()));
    }

    #[tokio::test]
    async fn test_http_client_post_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/end"))
            .and(header("content-type", JSON_CONTENT_TYPE))
            .and(body_string("{\"key\":1}"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&mock_server.uri(), Duration::from_secs(1)).unwrap();
        let result = client.post_json("/end", b"{\"key\":1}".to_vec()).await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_http_client_non_success_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&mock_server.uri(), Duration::from_secs(1)).unwrap();
        let result = client.post_json("/end", Vec::new()).await;
        assert_eq!(result, Err(TransmitError::Status(500)));
    }

    #[tokio::test]
    async fn test_http_client_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&mock_server.uri(), Duration::from_millis(50)).unwrap();
        let result = client.get("/start").await;
        assert!(matches!(result, Err(TransmitError::Transport(_))));
    }

    #[tokio::test]
    async fn test_http_client_connection_refused() {
        // Nothing listens on port 9 on the loopback interface
        let client = HttpClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let result = client.get("/start").await;
        assert!(matches!(result, Err(TransmitError::Transport(_))));
    }
}
