//! Fallback layer: prefer live data, substitute ranked/synthesized data on
//! any recoverable failure so the caller always gets a populated result.

use chrono::Local;
use tracing::warn;

use crate::catalog::{self, Location};
use crate::config::Config;
use crate::model::WeatherSnapshot;
use crate::provider::{ProviderError, WeatherApiProvider, WeatherSource};
use crate::search::{rank, SearchOptions};
use crate::synth::synthesize;

/// Wraps an optional live source. Recoverable live failures are logged and
/// silently replaced by the builtin ranker / synthesizer; only
/// [`ProviderError::InvalidPayload`] propagates (the user must see invalid
/// data rather than a plausible-looking guess).
pub struct FallbackSource {
    live: Option<Box<dyn WeatherSource>>,
    catalog: Vec<Location>,
    options: SearchOptions,
}

impl FallbackSource {
    /// Serve only synthesized data and builtin-catalog search.
    pub fn offline(catalog: Vec<Location>, options: SearchOptions) -> Self {
        Self { live: None, catalog, options }
    }

    /// Prefer `live`, falling back to `catalog` + synthesis.
    pub fn with_live(
        live: Box<dyn WeatherSource>,
        catalog: Vec<Location>,
        options: SearchOptions,
    ) -> Self {
        Self { live: Some(live), catalog, options }
    }

    /// Build from config: live WeatherAPI client when a key is present,
    /// offline otherwise. Always backed by the builtin catalog.
    pub fn from_config(config: &Config) -> Self {
        let options = config.search_options();
        match &config.api_key {
            Some(key) => Self::with_live(
                Box::new(WeatherApiProvider::new(key.clone())),
                catalog::builtin(),
                options,
            ),
            None => Self::offline(catalog::builtin(), options),
        }
    }
}

#[async_trait::async_trait]
impl WeatherSource for FallbackSource {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        if query.chars().count() < self.options.min_query_len {
            return Ok(Vec::new());
        }

        if let Some(live) = &self.live {
            match live.search_locations(query).await {
                Ok(hits) => {
                    return Ok(hits.into_iter().take(self.options.max_results).collect());
                }
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "live search failed, falling back to builtin catalog");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(rank(query, &self.catalog, self.options))
    }

    async fn fetch_snapshot(&self, location: &Location) -> Result<WeatherSnapshot, ProviderError> {
        if let Some(live) = &self.live {
            match live.fetch_snapshot(location).await {
                Ok(snapshot) => return Ok(snapshot),
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "live forecast failed, substituting synthesized data");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(synthesize(location, Local::now().date_naive()))
    }
}
