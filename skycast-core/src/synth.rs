//! Deterministic-plus-randomized forecast synthesis.
//!
//! Stands in for a live forecast provider: given a location and a date it
//! always produces a plausible [`WeatherSnapshot`]. The seasonal baseline and
//! the per-day condition sequence are pure functions of `(location, date)`;
//! only the jitter magnitudes draw from the RNG, which callers inject so
//! tests can seed it.

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;

use crate::catalog::Location;
use crate::model::{Condition, CurrentReading, ForecastDay, WeatherSnapshot, FORECAST_DAYS};

/// Northern-hemisphere seasonal base temperature in Celsius.
fn seasonal_base(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 8.0,
        3..=5 => 18.0,
        6..=8 => 28.0,
        _ => 15.0,
    }
}

/// Per-location baseline: the seasonal base shifted by a stable offset in
/// [-5, 4] derived from the location's identity, so the same place always
/// leans the same way relative to the season.
pub fn baseline_temp(location: &Location, today: NaiveDate) -> f64 {
    let variation = ((location.name.len() + location.id as usize) % 10) as f64 - 5.0;
    seasonal_base(today.month()) + variation
}

/// Condition for forecast day `day_index`, deterministic per location so a
/// week of entries stays visually coherent.
fn condition_for_day(location: &Location, day_index: usize) -> Condition {
    Condition::ALL[(day_index + location.id as usize) % Condition::ALL.len()]
}

/// Synthesize a snapshot with an injected RNG. Same `(location, today)`
/// always yields the same baseline, dates and per-day conditions; the jitter
/// fields are exactly reproducible given a seeded RNG.
pub fn synthesize_with<R: Rng>(
    location: &Location,
    today: NaiveDate,
    rng: &mut R,
) -> WeatherSnapshot {
    let baseline = baseline_temp(location, today);

    let condition = Condition::ALL[rng.random_range(0..Condition::ALL.len())];
    let temp_c = baseline + f64::from(rng.random_range(-3..=3));
    let feelslike_c = temp_c + f64::from(rng.random_range(-2..=2));
    let wind_kph = f64::from(rng.random_range(10..=29));
    let humidity: u8 = rng.random_range(40..=79);
    let current = CurrentReading::from_metric(temp_c, feelslike_c, condition, wind_kph, humidity);

    let forecast = (0..FORECAST_DAYS)
        .map(|i| {
            let date = today + Days::new(i as u64);
            let maxtemp_c = baseline + f64::from(rng.random_range(-4..=3));
            // Strictly below the max by at least 2 degrees.
            let mintemp_c = maxtemp_c - f64::from(rng.random_range(2..=9));
            let sunrise =
                format!("{}:{:02} AM", rng.random_range(6..=7), rng.random_range(10..=29));
            let sunset =
                format!("{}:{:02} PM", rng.random_range(5..=6), rng.random_range(30..=59));

            ForecastDay::from_metric(
                date,
                maxtemp_c,
                mintemp_c,
                condition_for_day(location, i),
                sunrise,
                sunset,
            )
        })
        .collect();

    WeatherSnapshot { location: location.clone(), current, forecast }
}

/// Synthesize a snapshot with the thread-local RNG.
pub fn synthesize(location: &Location, today: NaiveDate) -> WeatherSnapshot {
    synthesize_with(location, today, &mut rand::rng())
}
