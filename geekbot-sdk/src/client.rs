use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info};

use crate::{
    error::StandupError,
    types::{Report, ReportReceipt, Standup},
};

/// Client for the standup reporting API
pub struct StandupClient {
    api_key: Option<String>,
    base_url: String,
    http_client: reqwest::Client,
}

impl StandupClient {
    /// Create a new client pointed at the production API
    pub fn new() -> Result<Self, StandupError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                StandupError::service_unavailable(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: None,
            base_url: "https://api.geekbot.com".to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Record the API key used as the bearer authorization value on
    /// subsequent calls. Performs no network I/O.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<(), StandupError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(StandupError::invalid_credential("API key cannot be empty"));
        }
        self.api_key = Some(api_key);
        Ok(())
    }

    fn auth_headers(&self) -> Result<HeaderMap, StandupError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| StandupError::invalid_credential("No API key configured"))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| StandupError::invalid_credential("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Fetch the standups available to the authenticated user.
    ///
    /// The listing endpoint defines no structured error codes, so every
    /// failure surfaces as [`StandupError::ServiceUnavailable`].
    pub async fn get_standups(&self) -> Result<Vec<Standup>, StandupError> {
        let url = format!("{}/v1/standups", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| {
                StandupError::service_unavailable(format!("Error during the API call: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StandupError::service_unavailable(format!(
                "HTTP {} while listing standups: {}",
                status, error_text
            )));
        }

        let standups: Vec<Standup> = response.json().await.map_err(|e| {
            StandupError::service_unavailable(format!("Failed to parse standup listing: {}", e))
        })?;

        info!("Fetched {} standups", standups.len());
        Ok(standups)
    }

    /// Submit a compiled report. One attempt, no retries.
    pub async fn submit_report(&self, report: &Report) -> Result<ReportReceipt, StandupError> {
        let url = format!("{}/v1/reports", self.base_url);
        debug!("POST {} (standup {})", url, report.standup_id);

        let response = self
            .http_client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(report)
            .send()
            .await
            .map_err(|e| {
                StandupError::service_unavailable(format!("Error during the API call: {}", e))
            })?;

        let status = response.status();

        if status.is_success() {
            let receipt: ReportReceipt = response.json().await.map_err(|e| {
                StandupError::service_unavailable(format!(
                    "Failed to parse submission receipt: {}",
                    e
                ))
            })?;
            info!(
                "Report for standup {} accepted (done_at {})",
                report.standup_id, receipt.done_at
            );
            return Ok(receipt);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            reqwest::StatusCode::BAD_REQUEST => {
                // Echo the rejected payload so the user can see what the
                // service refused
                let payload = serde_json::to_string(report)
                    .unwrap_or_else(|_| "<unserializable report>".to_string());
                Err(StandupError::validation(format!(
                    "{} (submitted payload: {})",
                    error_text, payload
                )))
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(StandupError::invalid_credential(error_text)),
            reqwest::StatusCode::NOT_FOUND => Err(StandupError::standup_not_found(format!(
                "standup {}: {}",
                report.standup_id, error_text
            ))),
            _ => Err(StandupError::service_unavailable(format!(
                "HTTP {}: {}",
                status, error_text
            ))),
        }
    }
}
