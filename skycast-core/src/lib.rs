//! Core library for the `skycast` weather lookup tool.
//!
//! This crate defines:
//! - The weather data model (conditions, current readings, forecasts)
//! - A builtin location catalog and the search ranker over it
//! - A deterministic forecast synthesizer that stands in for live data
//! - Abstraction over live weather sources, with fallback, plus configuration
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services.

pub mod catalog;
pub mod config;
pub mod model;
pub mod provider;
pub mod search;
pub mod synth;

pub use catalog::Location;
pub use config::Config;
pub use model::{Condition, CurrentReading, ForecastDay, WeatherSnapshot, FORECAST_DAYS};
pub use provider::{FallbackSource, ProviderError, WeatherApiProvider, WeatherSource};
pub use search::{rank, SearchOptions, Searcher};
pub use synth::{synthesize, synthesize_with};
