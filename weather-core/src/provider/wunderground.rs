use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::truncate_body;

use super::{Kelvin, ProviderId, WeatherProvider};

const DEFAULT_BASE_URL: &str = "http://api.wunderground.com";

/// Weather Underground reports temperatures in Celsius; readings are
/// converted to Kelvin before being returned.
#[derive(Debug, Clone)]
pub struct WeatherUnderground {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherUnderground {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct WuObservation {
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct WuResponse {
    current_observation: WuObservation,
}

#[async_trait]
impl WeatherProvider for WeatherUnderground {
    fn id(&self) -> ProviderId {
        ProviderId::WeatherUnderground
    }

    async fn temperature(&self, city: &str) -> Result<Kelvin, ProviderError> {
        // The API key is a path segment here, not a query parameter.
        let url = format!("{}/api/{}/conditions/q/{}.json", self.base_url, self.api_key, city);

        let res = self
            .http
            .get(&url)
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

        let parsed: WuResponse = serde_json::from_str(&body)
            .map_err(|source| ProviderError::Decode { provider: self.id(), source })?;

        let kelvin = Kelvin::from_celsius(parsed.current_observation.temp_c);
        log::debug!("wunderground: {city}: {kelvin}");
        Ok(kelvin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn freezing_reading_normalizes_to_kelvin() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/TEST_KEY/conditions/q/Oslo.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_observation": { "temp_c": 0.0 }
            })))
            .mount(&server)
            .await;

        let provider = WeatherUnderground::with_base_url("TEST_KEY".to_string(), server.uri());
        let temp = provider.temperature("Oslo").await.expect("query must succeed");
        assert_eq!(temp, Kelvin(273.15));
    }

    #[tokio::test]
    async fn positive_celsius_converts() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/TEST_KEY/conditions/q/Madrid.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_observation": { "temp_c": 20.0 }
            })))
            .mount(&server)
            .await;

        let provider = WeatherUnderground::with_base_url("TEST_KEY".to_string(), server.uri());
        let temp = provider.temperature("Madrid").await.expect("query must succeed");
        assert!((temp.0 - 293.15).abs() < 1e-9, "unexpected reading: {temp}");
    }

    #[tokio::test]
    async fn non_success_status_carries_code_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("keymaster backend down"))
            .mount(&server)
            .await;

        let provider = WeatherUnderground::with_base_url("TEST_KEY".to_string(), server.uri());
        let err = provider.temperature("Oslo").await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("500"), "missing status code in: {msg}");
        assert!(msg.contains("keymaster backend down"), "missing body in: {msg}");
    }

    #[tokio::test]
    async fn missing_observation_field_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": { "version": "0.1" }
            })))
            .mount(&server)
            .await;

        let provider = WeatherUnderground::with_base_url("TEST_KEY".to_string(), server.uri());
        let err = provider.temperature("Oslo").await.unwrap_err();

        assert!(matches!(err, ProviderError::Decode { .. }), "unexpected error: {err}");
    }
}
