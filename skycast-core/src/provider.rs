//! Weather sources: the live provider integration and the fallback layer
//! that keeps the screen populated when live data is unavailable.

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Location;
use crate::model::WeatherSnapshot;

pub mod fallback;
pub mod weatherapi;

pub use fallback::FallbackSource;
pub use weatherapi::WeatherApiProvider;

/// Failures a live source can produce.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status { endpoint: &'static str, status: u16, body: String },

    /// The payload parsed but is structurally unusable (missing required
    /// fields, wrong shape). Unlike the transport failures above, this must
    /// surface to the user instead of being papered over with synthetic data.
    #[error("invalid {endpoint} payload: {reason}")]
    InvalidPayload { endpoint: &'static str, reason: String },
}

impl ProviderError {
    /// Whether the fallback layer may silently substitute synthesized data.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ProviderError::InvalidPayload { .. })
    }
}

/// A source of location suggestions and weather snapshots.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Resolve a free-text query into ranked location suggestions.
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, ProviderError>;

    /// Fetch current conditions plus the 7-day forecast for a location.
    async fn fetch_snapshot(&self, location: &Location) -> Result<WeatherSnapshot, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_are_recoverable() {
        let err = ProviderError::Status { endpoint: "current.json", status: 503, body: String::new() };
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_payload_is_not_recoverable() {
        let err = ProviderError::InvalidPayload {
            endpoint: "forecast.json",
            reason: "missing field `forecast`".to_string(),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("forecast.json"));
    }
}
