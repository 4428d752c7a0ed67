use axum::Json;
use axum::extract::{Path, State};
use std::time::Instant;
use weather_core::WeatherReport;

use crate::app::AppState;
use crate::error::InternalError;

pub async fn get_index() -> &'static str {
    "hello!\n"
}

pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, InternalError> {
    let begin = Instant::now();
    let temp = state.aggregator.temperature(&city).await?;

    Ok(Json(WeatherReport::new(city, temp, begin.elapsed())))
}
