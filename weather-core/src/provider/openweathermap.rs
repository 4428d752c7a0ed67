use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::truncate_body;

use super::{Kelvin, ProviderId, WeatherProvider};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// OpenWeatherMap reports temperatures in Kelvin already, so no unit
/// conversion is needed.
#[derive(Debug, Clone)]
pub struct OpenWeatherMap {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherMap {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
}

#[async_trait]
impl WeatherProvider for OpenWeatherMap {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeatherMap
    }

    async fn temperature(&self, city: &str) -> Result<Kelvin, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Request { provider: self.id(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Request { provider: self.id(), source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: self.id(),
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwmResponse = serde_json::from_str(&body)
            .map_err(|source| ProviderError::Decode { provider: self.id(), source })?;

        let kelvin = Kelvin(parsed.main.temp);
        log::debug!("openweathermap: {city}: {kelvin}");
        Ok(kelvin)
    }
}
