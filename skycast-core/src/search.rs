//! Location search: pure ranking plus an async wrapper that models the
//! provider latency the UI layer debounces against.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::catalog::Location;

/// Tuning knobs for the ranker. Variants of this widget have shipped with a
/// minimum query length of 1 or 2 and result caps of 4, 5 and 8; these are
/// the reference defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Queries shorter than this return no results and no latency.
    pub min_query_len: usize,
    /// Upper bound on returned suggestions.
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { min_query_len: 1, max_results: 8 }
    }
}

/// Match tiers, in sort order: exact name/country equality beats a
/// name/country prefix, which beats any substring hit on name, region or
/// country. `None` means no match at all.
fn match_tier(query: &str, location: &Location) -> Option<u8> {
    let name = location.name.to_lowercase();
    let region = location.region.to_lowercase();
    let country = location.country.to_lowercase();

    if name == query || country == query {
        Some(0)
    } else if name.starts_with(query) || country.starts_with(query) {
        Some(1)
    } else if name.contains(query) || region.contains(query) || country.contains(query) {
        Some(2)
    } else {
        None
    }
}

/// Rank `catalog` against `query`, case-insensitively.
///
/// Ties within a tier keep their catalog order (stable sort), and the result
/// is truncated to `options.max_results`. Pure in-memory computation; cannot
/// fail.
pub fn rank(query: &str, catalog: &[Location], options: SearchOptions) -> Vec<Location> {
    if query.chars().count() < options.min_query_len {
        return Vec::new();
    }

    let query = query.to_lowercase();
    let mut matches: Vec<(u8, &Location)> = catalog
        .iter()
        .filter_map(|location| match_tier(&query, location).map(|tier| (tier, location)))
        .collect();

    matches.sort_by_key(|(tier, _)| *tier);
    matches.into_iter().take(options.max_results).map(|(_, location)| location.clone()).collect()
}

/// Async search over an owned catalog with simulated provider latency.
///
/// Each call takes a generation ticket; a call that is superseded while it
/// sleeps resolves to `None` so the caller discards the stale result. This
/// is the at-most-one-in-flight-wins contract a debouncing UI needs.
#[derive(Debug)]
pub struct Searcher {
    catalog: Vec<Location>,
    options: SearchOptions,
    latency: Duration,
    generation: AtomicU64,
}

impl Searcher {
    pub fn new(catalog: Vec<Location>, options: SearchOptions) -> Self {
        Self {
            catalog,
            options,
            latency: Duration::from_millis(250),
            generation: AtomicU64::new(0),
        }
    }

    /// Override the simulated latency (zero in tests).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Returns `Some(results)` for the newest in-flight query, `None` when a
    /// later call superseded this one. Sub-minimum queries resolve to
    /// `Some(empty)` immediately, with no latency sleep, but still take a
    /// ticket: clearing the input supersedes an older in-flight search.
    pub async fn search(&self, query: &str) -> Option<Vec<Location>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.chars().count() < self.options.min_query_len {
            return Some(Vec::new());
        }

        tokio::time::sleep(self.latency).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(query, "discarding superseded search");
            return None;
        }

        Some(rank(query, &self.catalog, self.options))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use super::*;
    use crate::catalog;

    fn opts() -> SearchOptions {
        SearchOptions::default()
    }

    #[test]
    fn short_query_returns_nothing() {
        let catalog = catalog::builtin();
        assert!(rank("", &catalog, opts()).is_empty());

        let strict = SearchOptions { min_query_len: 2, max_results: 8 };
        assert!(rank("L", &catalog, strict).is_empty());
    }

    #[test]
    fn every_hit_matches_the_query() {
        let catalog = catalog::builtin();
        for query in ["lon", "united", "new", "an", "pakistan"] {
            for hit in rank(query, &catalog, opts()) {
                let hay = format!("{} {} {}", hit.name, hit.region, hit.country).to_lowercase();
                assert!(hay.contains(query), "{query:?} should match {hit:?}");
            }
        }
    }

    #[test]
    fn prefix_of_name_beats_plain_substring() {
        let catalog = catalog::builtin();
        let hits = rank("Lon", &catalog, opts());

        // "Lon" is a prefix of London but only a substring elsewhere.
        assert_eq!(hits[0].name, "London");
    }

    #[test]
    fn exact_match_beats_prefix_match() {
        let catalog = vec![
            Location {
                id: 1,
                name: "Delhi Cantonment".to_string(),
                region: "Delhi".to_string(),
                country: "India".to_string(),
                lat: 28.59,
                lon: 77.13,
            },
            Location {
                id: 2,
                name: "Delhi".to_string(),
                region: "Delhi".to_string(),
                country: "India".to_string(),
                lat: 28.70,
                lon: 77.10,
            },
        ];

        let hits = rank("delhi", &catalog, opts());
        assert_eq!(hits[0].name, "Delhi");
        assert_eq!(hits[1].name, "Delhi Cantonment");
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = catalog::builtin();
        let hits = rank("india", &catalog, opts());

        // Every Indian city lands in the same exact-country tier; the ranker
        // must not reorder them.
        let names: Vec<&str> = hits.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata", "Hyderabad"]);
    }

    #[test]
    fn results_are_capped() {
        let catalog = catalog::builtin();
        let capped = SearchOptions { min_query_len: 1, max_results: 4 };
        assert_eq!(rank("a", &catalog, capped).len(), 4);
        assert!(rank("a", &catalog, opts()).len() <= 8);
    }

    #[tokio::test]
    async fn short_query_skips_the_latency_sleep() {
        let searcher = Searcher::new(catalog::builtin(), opts())
            .with_latency(Duration::from_secs(30));

        let started = Instant::now();
        let hits = searcher.search("").await;

        assert_eq!(hits, Some(Vec::new()));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn superseded_search_is_discarded() {
        let searcher = Arc::new(
            Searcher::new(catalog::builtin(), opts()).with_latency(Duration::from_millis(50)),
        );

        let first = {
            let searcher = Arc::clone(&searcher);
            tokio::spawn(async move { searcher.search("lon").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = searcher.search("london").await;

        assert!(first.await.expect("task completed").is_none());
        let hits = second.expect("newest search wins");
        assert_eq!(hits[0].name, "London");
    }

    #[tokio::test]
    async fn clearing_the_input_supersedes_an_in_flight_search() {
        let searcher = Arc::new(
            Searcher::new(catalog::builtin(), opts()).with_latency(Duration::from_millis(50)),
        );

        let first = {
            let searcher = Arc::clone(&searcher);
            tokio::spawn(async move { searcher.search("lon").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let cleared = searcher.search("").await;

        // The cleared input closes the panel with an empty result; the older
        // search must resolve stale instead of re-populating it.
        assert_eq!(cleared, Some(Vec::new()));
        assert!(first.await.expect("task completed").is_none());
    }
}
