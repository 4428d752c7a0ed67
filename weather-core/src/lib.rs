//! Core library for the multi-provider weather service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over weather providers
//! - The multi-provider aggregator (sequential queries, mean temperature)
//! - Shared domain models (reports, errors)
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use aggregate::MultiProvider;
pub use config::{Config, ProviderConfig};
pub use error::ProviderError;
pub use model::WeatherReport;
pub use provider::{Kelvin, ProviderId, WeatherProvider};
