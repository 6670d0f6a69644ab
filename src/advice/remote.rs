//! Client for the real-advice HTTP endpoint.
//!
//! One GET per real round, cache-busted with a millisecond timestamp query
//! parameter so the upstream CDN does not hand back the same slip twice. The
//! endpoint answers with `{"slip": {"id": 117, "advice": "..."}}`.

use log::debug;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

use super::error::AdviceFetchError;
use super::AdviceSource;
use crate::config::AdviceConfig;
use crate::logutil::preview;

#[derive(Debug, Deserialize)]
struct SlipResponse {
    slip: Slip,
}

#[derive(Debug, Deserialize)]
struct Slip {
    advice: String,
}

/// Extract the advice text from an endpoint response body.
pub fn parse_advice_body(body: &str) -> Result<String, AdviceFetchError> {
    let parsed: SlipResponse =
        serde_json::from_str(body).map_err(|e| AdviceFetchError::Parse(e.to_string()))?;
    let advice = parsed.slip.advice.trim();
    if advice.is_empty() {
        return Err(AdviceFetchError::Parse("empty advice text".to_string()));
    }
    Ok(advice.to_string())
}

pub struct AdviceClient {
    config: AdviceConfig,
    client: reqwest::Client,
}

impl AdviceClient {
    pub fn new(config: AdviceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build the request URL for the given timestamp (milliseconds since epoch).
    pub fn build_url(&self, timestamp_ms: i64) -> String {
        let sep = if self.config.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}timestamp={}", self.config.endpoint, sep, timestamp_ms)
    }

    async fn fetch_once(&self) -> Result<String, AdviceFetchError> {
        let url = self.build_url(chrono::Utc::now().timestamp_millis());
        debug!("Fetching advice from: {}", url);

        let request = self.client.get(&url).send();
        let response = match self.config.timeout_seconds {
            Some(secs) => timeout(Duration::from_secs(secs as u64), request)
                .await
                .map_err(|_| AdviceFetchError::Timeout(secs))??,
            None => request.await?,
        };

        debug!("Advice endpoint status: {}", response.status());
        if !response.status().is_success() {
            return Err(AdviceFetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let advice = parse_advice_body(&body)?;
        debug!("Advice received: {}", preview(&advice));
        Ok(advice)
    }
}

impl AdviceSource for AdviceClient {
    async fn fetch_advice(&self) -> Result<String, AdviceFetchError> {
        self.fetch_once().await
    }
}
