use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Location;

/// Number of days in every forecast, today included.
pub const FORECAST_DAYS: usize = 7;

/// Round a Celsius temperature to whole Fahrenheit degrees.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0 + 32.0).round()
}

/// Round a km/h wind speed to whole mph.
pub fn kph_to_mph(kph: f64) -> f64 {
    (kph * 0.621371).round()
}

/// The fixed set of conditions skycast can display.
///
/// Codes and icon paths follow the WeatherAPI.com classification so live and
/// synthesized data render through the same assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    LightRain,
    Overcast,
    Mist,
    Fog,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::LightRain,
        Condition::Overcast,
        Condition::Mist,
        Condition::Fog,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::LightRain => "Light rain",
            Condition::Overcast => "Overcast",
            Condition::Mist => "Mist",
            Condition::Fog => "Fog",
        }
    }

    /// WeatherAPI.com condition code.
    pub fn code(&self) -> u16 {
        match self {
            Condition::Sunny => 113,
            Condition::PartlyCloudy => 116,
            Condition::Cloudy => 119,
            Condition::LightRain => 296,
            Condition::Overcast => 122,
            Condition::Mist => 143,
            Condition::Fog => 248,
        }
    }

    /// Opaque icon resource identifier, same shape for live and synthetic data.
    pub fn icon_path(&self) -> String {
        format!("//cdn.weatherapi.com/weather/64x64/day/{}.png", self.code())
    }

    /// Map a provider condition code onto the fixed set.
    ///
    /// Codes outside the set collapse to the nearest member: precipitation
    /// codes become light rain, everything else cloudy.
    pub fn from_code(code: u16) -> Self {
        match code {
            113 => Condition::Sunny,
            116 => Condition::PartlyCloudy,
            119 => Condition::Cloudy,
            122 => Condition::Overcast,
            143 => Condition::Mist,
            248 | 260 => Condition::Fog,
            263..=284 | 293..=320 | 353..=395 => Condition::LightRain,
            _ => Condition::Cloudy,
        }
    }
}

/// Current conditions at one location.
///
/// Fahrenheit and mph fields are always derived from their metric
/// counterparts; use [`CurrentReading::from_metric`] so they stay consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentReading {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub wind_mph: f64,
    /// Relative humidity, 0-100.
    pub humidity: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
}

impl CurrentReading {
    pub fn from_metric(
        temp_c: f64,
        feelslike_c: f64,
        condition: Condition,
        wind_kph: f64,
        humidity: u8,
    ) -> Self {
        Self {
            temp_c,
            temp_f: celsius_to_fahrenheit(temp_c),
            condition,
            wind_kph,
            wind_mph: kph_to_mph(wind_kph),
            humidity,
            feelslike_c,
            feelslike_f: celsius_to_fahrenheit(feelslike_c),
        }
    }
}

/// One day of forecast. Invariant: `mintemp_c <= maxtemp_c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: Condition,
    /// Time of day, `H:MM AM` with no leading zero on the hour.
    pub sunrise: String,
    /// Time of day, `H:MM PM` with no leading zero on the hour.
    pub sunset: String,
}

impl ForecastDay {
    pub fn from_metric(
        date: NaiveDate,
        maxtemp_c: f64,
        mintemp_c: f64,
        condition: Condition,
        sunrise: String,
        sunset: String,
    ) -> Self {
        Self {
            date,
            maxtemp_c,
            maxtemp_f: celsius_to_fahrenheit(maxtemp_c),
            mintemp_c,
            mintemp_f: celsius_to_fahrenheit(mintemp_c),
            condition,
            sunrise,
            sunset,
        }
    }
}

/// The complete weather payload for one location at one point in time.
///
/// Built fresh on every selection; `forecast` holds exactly
/// [`FORECAST_DAYS`] entries ordered by ascending date starting today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentReading,
    pub forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion_rounds() {
        assert_eq!(celsius_to_fahrenheit(22.0), 72.0);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(-5.0), 23.0);
    }

    #[test]
    fn mph_conversion_rounds() {
        assert_eq!(kph_to_mph(13.0), 8.0);
        assert_eq!(kph_to_mph(29.0), 18.0);
    }

    #[test]
    fn reading_derives_imperial_fields() {
        let reading =
            CurrentReading::from_metric(22.0, 24.0, Condition::PartlyCloudy, 13.0, 65);

        assert_eq!(reading.temp_f, 72.0);
        assert_eq!(reading.feelslike_f, 75.0);
        assert_eq!(reading.wind_mph, 8.0);
    }

    #[test]
    fn forecast_day_derives_imperial_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        let day = ForecastDay::from_metric(
            date,
            28.0,
            19.0,
            Condition::Sunny,
            "6:15 AM".to_string(),
            "6:45 PM".to_string(),
        );

        assert_eq!(day.maxtemp_f, 82.0);
        assert_eq!(day.mintemp_f, 66.0);
    }

    #[test]
    fn condition_codes_roundtrip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_code(condition.code()), condition);
        }
    }

    #[test]
    fn unknown_codes_collapse_onto_the_set() {
        // 263: patchy light drizzle; 389: rain with thunder
        assert_eq!(Condition::from_code(263), Condition::LightRain);
        assert_eq!(Condition::from_code(389), Condition::LightRain);
        assert_eq!(Condition::from_code(9999), Condition::Cloudy);
    }

    #[test]
    fn icon_path_embeds_code() {
        assert_eq!(
            Condition::Sunny.icon_path(),
            "//cdn.weatherapi.com/weather/64x64/day/113.png"
        );
    }
}
