//! Cached related-hadith lists

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::hadith::Hadith;

/// A computed related list together with when and for which locale it was computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCacheEntry {
    pub hadiths: Vec<Hadith>,
    pub locale: String,
    pub computed_at: DateTime<Utc>,
}

impl RelatedCacheEntry {
    pub fn new(hadiths: Vec<Hadith>, locale: impl Into<String>) -> Self {
        Self {
            hadiths,
            locale: locale.into(),
            computed_at: Utc::now(),
        }
    }

    pub fn computed_at(mut self, computed_at: DateTime<Utc>) -> Self {
        self.computed_at = computed_at;
        self
    }

    /// Whether the entry is younger than `ttl` at `now`
    ///
    /// Entries stamped in the future (clock skew) count as fresh.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match now.signed_duration_since(self.computed_at).to_std() {
            Ok(age) => age < ttl,
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_within_ttl() {
        let now = Utc::now();
        let entry = RelatedCacheEntry::new(vec![], "en").computed_at(now - chrono::Duration::hours(23));

        assert!(entry.is_fresh(Duration::from_secs(24 * 3600), now));
    }

    #[test]
    fn test_stale_after_ttl() {
        let now = Utc::now();
        let entry = RelatedCacheEntry::new(vec![], "en").computed_at(now - chrono::Duration::hours(24));

        assert!(!entry.is_fresh(Duration::from_secs(24 * 3600), now));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let now = Utc::now();
        let entry = RelatedCacheEntry::new(vec![], "en").computed_at(now + chrono::Duration::minutes(5));

        assert!(entry.is_fresh(Duration::from_secs(60), now));
    }

    #[test]
    fn test_round_trips_through_json() {
        let entry = RelatedCacheEntry::new(vec![Hadith::new(1, "Sahih Muslim", "1")], "ar");
        let json = serde_json::to_string(&entry).unwrap();
        let decoded: RelatedCacheEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, entry);
    }
}
