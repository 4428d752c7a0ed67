use axum::{Router, routing::get};
use std::sync::Arc;
use weather_core::MultiProvider;

use crate::routes;

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<MultiProvider>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::get_index))
        .route("/weather/{city}", get(routes::get_weather))
        .with_state(state)
}
