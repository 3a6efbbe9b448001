use std::time::Duration;

use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tracing::{debug, info};

use crate::{
    config::{Config, DEFAULT_ENDPOINT_URL},
    errors::FcmError,
    models::{message::HttpMessage, response::HttpResponse},
};

#[derive(Clone)]
pub struct FcmClient {
    http_client: Client,
    endpoint_url: String,
    server_key: String,
}

impl FcmClient {
    pub fn new(server_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            server_key: server_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FcmError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.fcm_request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http_client = builder.build().map_err(FcmError::HttpClient)?;

        info!(endpoint = %config.fcm_endpoint_url, "FCM client initialized");

        Ok(Self {
            http_client,
            endpoint_url: config.fcm_endpoint_url.clone(),
            server_key: config.fcm_server_key.clone(),
        })
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    pub fn set_server_key(&mut self, server_key: impl Into<String>) {
        self.server_key = server_key.into();
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// A non-200 status comes back as `Ok` carrying only the status code.
    pub async fn send(&self, message: &HttpMessage) -> Result<HttpResponse, FcmError> {
        if self.server_key.is_empty() {
            return Err(FcmError::MissingServerKey);
        }

        let body = serde_json::to_vec(message).map_err(FcmError::Serialization)?;

        debug!(
            to = %message.to,
            registration_ids = message.registration_ids.len(),
            dry_run = message.dry_run,
            payload_bytes = body.len(),
            "Sending FCM message"
        );

        let response = self
            .http_client
            .post(&self.endpoint_url)
            .header(AUTHORIZATION, format!("key={}", self.server_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| FcmError::Transport {
                status_code: source.status().map(|status| status.as_u16()),
                source,
            })?;

        let status = response.status();
        let status_code = status.as_u16();

        let response_body = response
            .bytes()
            .await
            .map_err(|source| FcmError::Transport {
                status_code: Some(status_code),
                source,
            })?;

        debug!(status_code, "FCM response received");

        if status != StatusCode::OK {
            return Ok(HttpResponse::with_status(status_code));
        }

        let mut parsed: HttpResponse = serde_json::from_slice(&response_body)
            .map_err(|source| FcmError::Deserialization { status_code, source })?;
        parsed.status_code = status_code;

        Ok(parsed)
    }
}
