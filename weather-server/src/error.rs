use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use weather_core::ProviderError;

/// Adapter turning any upstream failure into a plain-text 500. The client
/// sees the error's text but no distinction between error kinds.
pub struct InternalError {
    pub message: String,
}

impl From<ProviderError> for InternalError {
    fn from(err: ProviderError) -> Self {
        InternalError { message: err.to_string() }
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        error!("Error encountered while processing request: {}", self.message);
        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}
