use crate::{
    Config,
    error::ProviderError,
    provider::{Kelvin, ProviderId, WeatherProvider, provider_from_config},
};

/// An ordered list of providers queried one after another.
///
/// Queries are strictly sequential; the first provider failure aborts the
/// whole lookup and no later providers are contacted. On full success the
/// arithmetic mean of all readings is returned.
#[derive(Debug)]
pub struct MultiProvider {
    providers: Vec<Box<dyn WeatherProvider>>,
}

impl MultiProvider {
    pub fn new(providers: Vec<Box<dyn WeatherProvider>>) -> Self {
        Self { providers }
    }

    /// Build the fixed provider pair from config. Every known provider must
    /// have an API key configured.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let providers = ProviderId::all()
            .iter()
            .map(|id| provider_from_config(*id, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(providers))
    }

    pub async fn temperature(&self, city: &str) -> Result<Kelvin, ProviderError> {
        if self.providers.is_empty() {
            return Err(ProviderError::NoProviders);
        }

        let mut sum = 0.0;
        for provider in &self.providers {
            let Kelvin(k) = provider.temperature(city).await?;
            sum += k;
        }

        Ok(Kelvin(sum / self.providers.len() as f64))
    }
}
