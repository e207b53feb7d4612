//! Related-hadith scoring and resolution configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Weights, thresholds and limits for related-hadith resolution
///
/// Defaults reproduce the production heuristic. The weights are empirical,
/// so they are exposed as configuration instead of being derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Added when a candidate's narrator equals the subject's
    #[serde(default = "default_narrator_weight")]
    pub narrator_weight: f64,
    /// Added when a candidate comes from the subject's collection
    #[serde(default = "default_collection_weight")]
    pub collection_weight: f64,
    /// Added on top of the collection weight for nearby hadith numbers
    #[serde(default = "default_proximity_weight")]
    pub proximity_weight: f64,
    /// Hadith-number distance must be strictly below this for the proximity bonus
    #[serde(default = "default_proximity_window")]
    pub proximity_window: i64,
    /// Maximum contribution of keyword overlap
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,
    /// Number of leading words of the translation used as keywords
    #[serde(default = "default_keyword_count")]
    pub keyword_count: usize,
    /// Candidates scoring below this are dropped
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    /// Maximum number of related hadiths returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Backfill from the subject's collection when fewer than this many survive scoring
    #[serde(default = "default_backfill_threshold")]
    pub backfill_threshold: usize,
    /// Result cap for each search query
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Result cap for the collection backfill listing
    #[serde(default = "default_backfill_limit")]
    pub backfill_limit: usize,
    /// How long a computed list stays valid
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Deadline for all upstream calls of one resolution
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_narrator_weight() -> f64 {
    0.2
}

fn default_collection_weight() -> f64 {
    0.3
}

fn default_proximity_weight() -> f64 {
    0.1
}

fn default_proximity_window() -> i64 {
    10
}

fn default_keyword_weight() -> f64 {
    0.5
}

fn default_keyword_count() -> usize {
    5
}

fn default_min_score() -> f64 {
    0.3
}

fn default_max_results() -> usize {
    4
}

fn default_backfill_threshold() -> usize {
    3
}

fn default_search_limit() -> usize {
    10
}

fn default_backfill_limit() -> usize {
    5
}

fn default_cache_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            narrator_weight: default_narrator_weight(),
            collection_weight: default_collection_weight(),
            proximity_weight: default_proximity_weight(),
            proximity_window: default_proximity_window(),
            keyword_weight: default_keyword_weight(),
            keyword_count: default_keyword_count(),
            min_score: default_min_score(),
            max_results: default_max_results(),
            backfill_threshold: default_backfill_threshold(),
            search_limit: default_search_limit(),
            backfill_limit: default_backfill_limit(),
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl RelatedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl_secs = ttl.as_secs();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Rejects configurations that cannot produce a meaningful ranking
    pub fn validate(&self) -> Result<(), DomainError> {
        let weights = [
            ("narrator_weight", self.narrator_weight),
            ("collection_weight", self.collection_weight),
            ("proximity_weight", self.proximity_weight),
            ("keyword_weight", self.keyword_weight),
            ("min_score", self.min_score),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::configuration(format!(
                    "related.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.keyword_count == 0 {
            return Err(DomainError::configuration(
                "related.keyword_count must be at least 1",
            ));
        }

        if self.max_results == 0 {
            return Err(DomainError::configuration(
                "related.max_results must be at least 1",
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(DomainError::configuration(
                "related.request_timeout_ms must be at least 1",
            ));
        }

        Ok(())
    }
}
