use reqwest::StatusCode;
use thiserror::Error;

use crate::provider::ProviderId;

/// Errors surfaced by providers and the aggregator.
///
/// Upstream failures are not retried or recovered; they propagate unchanged up
/// to the HTTP handler, which reports any of them as a 500 with this error's
/// display text.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {provider} failed: {source}")]
    Request {
        provider: ProviderId,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}: {body}")]
    Status {
        provider: ProviderId,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode {provider} response: {source}")]
    Decode {
        provider: ProviderId,
        #[source]
        source: serde_json::Error,
    },

    #[error("No API key configured for provider '{0}'")]
    MissingApiKey(ProviderId),

    #[error("no providers configured")]
    NoProviders,
}
