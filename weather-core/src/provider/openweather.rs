use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::WeatherRecord,
    query::redact_key,
};

use super::{WeatherSource, check_status, decode_record};

/// Single-shot HTTP client for the OpenWeather current-weather endpoint.
///
/// One GET per call, default timeouts, no retries.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch(&self, url: &str) -> Result<WeatherRecord> {
        debug!(url = %redact_key(url), "requesting current weather");

        let res = self.http.get(url).send().await.map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;
        debug!(%status, bytes = body.len(), "response received");

        check_status(status, &body)?;
        decode_record(&body)
    }
}

// reqwest puts the URL, key included, in its error text.
fn transport(err: reqwest::Error) -> WeatherError {
    WeatherError::Transport(err.without_url())
}
