use serde::{Deserialize, Serialize};

use crate::provider::Kelvin;

/// Response body for a weather query: the queried city, the averaged
/// temperature in Kelvin, and the formatted elapsed wall-clock time.
/// Constructed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temp: Kelvin,
    pub took: String,
}

impl WeatherReport {
    pub fn new(city: String, temp: Kelvin, took: std::time::Duration) -> Self {
        Self { city, temp, took: format!("{took:?}") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_flat_keys() {
        let report = WeatherReport {
            city: "Boston".to_string(),
            temp: Kelvin(281.0),
            took: "1.5ms".to_string(),
        };

        let json = serde_json::to_value(&report).expect("report must serialize");
        assert_eq!(json["city"], "Boston");
        assert_eq!(json["temp"], 281.0);
        assert_eq!(json["took"], "1.5ms");
    }
}
