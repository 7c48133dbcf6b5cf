//! Builtin location catalog.
//!
//! A static reference list used by the offline search ranker and as the
//! fallback when no live provider is configured. Constructed explicitly and
//! passed by value so tests can substitute their own catalogs.

use serde::{Deserialize, Serialize};

/// A known location. Immutable once built; `id` is unique and stable.
///
/// Field names match WeatherAPI.com `search.json` results, so live search
/// hits deserialize straight into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

fn loc(id: u32, name: &str, region: &str, country: &str, lat: f64, lon: f64) -> Location {
    Location {
        id,
        name: name.to_string(),
        region: region.to_string(),
        country: country.to_string(),
        lat,
        lon,
    }
}

/// The builtin reference catalog: 34 major cities across six continents.
pub fn builtin() -> Vec<Location> {
    vec![
        // North America
        loc(1, "New York", "New York", "United States of America", 40.71, -74.01),
        loc(2, "Los Angeles", "California", "United States of America", 34.05, -118.24),
        loc(3, "Toronto", "Ontario", "Canada", 43.65, -79.38),
        // Europe
        loc(4, "London", "City of London, Greater London", "United Kingdom", 51.52, -0.11),
        loc(5, "Paris", "Ile-de-France", "France", 48.87, 2.33),
        loc(6, "Berlin", "Berlin", "Germany", 52.52, 13.41),
        loc(7, "Rome", "Lazio", "Italy", 41.90, 12.50),
        // Asia
        loc(8, "Tokyo", "Tokyo", "Japan", 35.69, 139.69),
        loc(9, "Mumbai", "Maharashtra", "India", 19.08, 72.88),
        loc(10, "Delhi", "Delhi", "India", 28.70, 77.10),
        loc(11, "Bangalore", "Karnataka", "India", 12.97, 77.59),
        loc(12, "Chennai", "Tamil Nadu", "India", 13.08, 80.27),
        loc(13, "Kolkata", "West Bengal", "India", 22.57, 88.36),
        loc(14, "Hyderabad", "Telangana", "India", 17.39, 78.46),
        loc(15, "Karachi", "Sindh", "Pakistan", 24.86, 67.01),
        loc(16, "Lahore", "Punjab", "Pakistan", 31.55, 74.36),
        loc(17, "Islamabad", "Islamabad Capital Territory", "Pakistan", 33.72, 73.06),
        loc(18, "Dhaka", "Dhaka", "Bangladesh", 23.81, 90.36),
        loc(19, "Bangkok", "Bangkok", "Thailand", 13.76, 100.50),
        loc(20, "Singapore", "Singapore", "Singapore", 1.35, 103.82),
        loc(21, "Jakarta", "Jakarta", "Indonesia", -6.21, 106.85),
        loc(22, "Manila", "Metro Manila", "Philippines", 14.60, 120.98),
        loc(23, "Kuala Lumpur", "Kuala Lumpur", "Malaysia", 3.14, 101.69),
        loc(24, "Ho Chi Minh City", "Ho Chi Minh", "Vietnam", 10.82, 106.63),
        loc(25, "Seoul", "Seoul", "South Korea", 37.57, 126.98),
        loc(26, "Beijing", "Beijing", "China", 39.90, 116.41),
        loc(27, "Shanghai", "Shanghai", "China", 31.23, 121.47),
        loc(28, "Hong Kong", "Hong Kong", "Hong Kong", 22.32, 114.17),
        // Middle East
        loc(29, "Dubai", "Dubai", "United Arab Emirates", 25.20, 55.27),
        loc(30, "Riyadh", "Riyadh", "Saudi Arabia", 24.71, 46.68),
        // Africa
        loc(31, "Cairo", "Cairo", "Egypt", 30.04, 31.24),
        loc(32, "Lagos", "Lagos", "Nigeria", 6.52, 3.38),
        // Oceania
        loc(33, "Sydney", "New South Wales", "Australia", -33.87, 151.21),
        loc(34, "Melbourne", "Victoria", "Australia", -37.81, 144.96),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique_and_stable() {
        let catalog = builtin();
        assert_eq!(catalog.len(), 34);

        let mut ids: Vec<u32> = catalog.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 34);

        assert_eq!(catalog[0].name, "New York");
        assert_eq!(catalog[33].name, "Melbourne");
    }

    #[test]
    fn location_deserializes_from_search_json_shape() {
        // WeatherAPI search hits carry an extra `url` slug; it is ignored.
        let body = r#"{
            "id": 2801268,
            "name": "London",
            "region": "City of London, Greater London",
            "country": "United Kingdom",
            "lat": 51.52,
            "lon": -0.11,
            "url": "london-city-of-london-greater-london-united-kingdom"
        }"#;

        let parsed: Location = serde_json::from_str(body).expect("valid location JSON");
        assert_eq!(parsed.name, "London");
        assert_eq!(parsed.country, "United Kingdom");
    }
}
