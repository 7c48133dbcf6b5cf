//! Live WeatherAPI.com client: `search.json` for location lookup,
//! `current.json` + `forecast.json` for snapshots.

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::catalog::Location;
use crate::model::{Condition, CurrentReading, ForecastDay, WeatherSnapshot, FORECAST_DAYS};
use crate::provider::{ProviderError, WeatherSource};

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let res = self.http.get(&url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidPayload { endpoint, reason: e.to_string() })
    }
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    code: u16,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaCurrentResponse {
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: NaiveDate,
    day: WaDay,
    astro: WaAstro,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    forecast: WaForecast,
}

#[async_trait::async_trait]
impl WeatherSource for WeatherApiProvider {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        self.get_json("search.json", &[("key", self.api_key.as_str()), ("q", query)]).await
    }

    async fn fetch_snapshot(&self, location: &Location) -> Result<WeatherSnapshot, ProviderError> {
        let q = location.name.as_str();
        let key = self.api_key.as_str();
        let current_query = [("key", key), ("q", q), ("aqi", "no")];
        let forecast_query =
            [("key", key), ("q", q), ("days", "7"), ("aqi", "no"), ("alerts", "no")];

        let (current, forecast) = tokio::try_join!(
            self.get_json::<WaCurrentResponse>("current.json", &current_query),
            self.get_json::<WaForecastResponse>("forecast.json", &forecast_query),
        )?;

        let days = forecast.forecast.forecastday;
        if days.len() < FORECAST_DAYS {
            return Err(ProviderError::InvalidPayload {
                endpoint: "forecast.json",
                reason: format!("expected {FORECAST_DAYS} forecast days, got {}", days.len()),
            });
        }

        let current = CurrentReading::from_metric(
            current.current.temp_c,
            current.current.feelslike_c,
            Condition::from_code(current.current.condition.code),
            current.current.wind_kph,
            current.current.humidity,
        );

        let forecast = days
            .into_iter()
            .take(FORECAST_DAYS)
            .map(|entry| {
                ForecastDay::from_metric(
                    entry.date,
                    entry.day.maxtemp_c,
                    entry.day.mintemp_c,
                    Condition::from_code(entry.day.condition.code),
                    entry.astro.sunrise,
                    entry.astro.sunset,
                )
            })
            .collect();

        Ok(WeatherSnapshot { location: location.clone(), current, forecast })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
