//! Related-hadith resolution

use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use crate::domain::cache::{related_key, Cache, CacheExt};
use crate::domain::hadith::{Hadith, HadithApi, HadithId};
use crate::domain::related::{
    merge_candidates, RelatedCacheEntry, RelatedConfig, RelatedSignals, RelevanceScorer,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::{
    record_related_cache_lookup, record_related_resolution, record_related_upstream_error,
};

/// Recommends hadiths related to a subject hadith
///
/// Candidates come from a narrator search and a keyword search run
/// concurrently, are scored by [`RelevanceScorer`] and, when too few survive,
/// topped up from the subject's collection. Results are cached per subject id
/// and locale.
///
/// Upstream failures never reach the caller: a failed search contributes no
/// candidates, and a failed backfill yields an empty (uncached) list.
pub struct RelatedHadithsResolver {
    api: Arc<dyn HadithApi>,
    cache: Arc<dyn Cache>,
    scorer: RelevanceScorer,
}

impl fmt::Debug for RelatedHadithsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedHadithsResolver")
            .field("cache", &self.cache.backend_name())
            .field("config", self.scorer.config())
            .finish()
    }
}

impl RelatedHadithsResolver {
    pub fn new(api: Arc<dyn HadithApi>, cache: Arc<dyn Cache>) -> Self {
        Self::with_config(api, cache, RelatedConfig::default())
    }

    pub fn with_config(
        api: Arc<dyn HadithApi>,
        cache: Arc<dyn Cache>,
        config: RelatedConfig,
    ) -> Self {
        Self {
            api,
            cache,
            scorer: RelevanceScorer::new(config),
        }
    }

    pub fn config(&self) -> &RelatedConfig {
        self.scorer.config()
    }

    /// Related hadiths for `hadith`, bounded by the configured request timeout
    pub async fn get_related(&self, hadith: &Hadith, locale: &str) -> Vec<Hadith> {
        let deadline = Instant::now() + self.config().request_timeout();
        self.get_related_until(hadith, locale, deadline).await
    }

    /// Related hadiths for `hadith`; every upstream call must finish by `deadline`
    #[instrument(skip(self, hadith, deadline), fields(hadith_id = %hadith.id))]
    pub async fn get_related_until(
        &self,
        hadith: &Hadith,
        locale: &str,
        deadline: Instant,
    ) -> Vec<Hadith> {
        let key = related_key(hadith.id, locale);

        if let Some(cached) = self.lookup(&key, locale).await {
            return cached;
        }

        let started = std::time::Instant::now();

        match self.compute(hadith, locale, deadline).await {
            Ok(related) => {
                record_related_resolution(started.elapsed(), related.len());
                self.store(&key, &related, locale).await;
                related
            }
            Err(e) => {
                warn!(
                    kind = e.kind_label(),
                    error = %e,
                    "Related hadith backfill failed, returning no recommendations"
                );
                record_related_upstream_error("backfill", e.kind_label());
                Vec::new()
            }
        }
    }

    async fn lookup(&self, key: &str, locale: &str) -> Option<Vec<Hadith>> {
        let entry = match self.cache.get::<RelatedCacheEntry>(key).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key, error = %e, "Related cache read failed, treating as miss");
                None
            }
        };

        match entry {
            Some(entry) if entry.locale != locale => {
                record_related_cache_lookup("miss");
                None
            }
            Some(entry) if entry.is_fresh(self.config().cache_ttl(), Utc::now()) => {
                debug!(key, count = entry.hadiths.len(), "Related cache hit");
                record_related_cache_lookup("hit");
                Some(entry.hadiths)
            }
            Some(_) => {
                record_related_cache_lookup("stale");
                None
            }
            None => {
                record_related_cache_lookup("miss");
                None
            }
        }
    }

    async fn store(&self, key: &str, related: &[Hadith], locale: &str) {
        let entry = RelatedCacheEntry::new(related.to_vec(), locale);

        if let Err(e) = self.cache.set(key, &entry, self.config().cache_ttl()).await {
            warn!(key, error = %e, "Failed to cache related hadiths");
        }
    }

    /// Searches, scores and backfills; only a backfill failure is an error
    async fn compute(
        &self,
        hadith: &Hadith,
        locale: &str,
        deadline: Instant,
    ) -> Result<Vec<Hadith>, DomainError> {
        let config = self.config();
        let signals = RelatedSignals::from_hadith(hadith, config.keyword_count);
        let phrase = signals.keyword_phrase();

        let (by_narrator, by_keywords) = tokio::join!(
            self.search("narrator_search", signals.narrator.as_deref(), locale, deadline),
            self.search("keyword_search", phrase.as_deref(), locale, deadline),
        );

        let candidates = merge_candidates(hadith.id, [by_narrator, by_keywords]);
        let candidate_count = candidates.len();

        let mut related: Vec<Hadith> = self
            .scorer
            .rank(hadith, &signals, candidates)
            .into_iter()
            .map(|scored| scored.hadith)
            .collect();

        debug!(candidate_count, selected = related.len(), "Scored related candidates");

        if related.len() < config.backfill_threshold {
            self.backfill(hadith, locale, deadline, &mut related).await?;
        }

        Ok(related)
    }

    async fn search(
        &self,
        operation: &'static str,
        query: Option<&str>,
        locale: &str,
        deadline: Instant,
    ) -> Vec<Hadith> {
        let Some(query) = query else {
            return Vec::new();
        };

        let limit = self.config().search_limit;

        match with_deadline(deadline, self.api.search(query, locale, limit)).await {
            Ok(hadiths) => hadiths,
            Err(e) => {
                warn!(operation, kind = e.kind_label(), error = %e, "Related search failed");
                record_related_upstream_error(operation, e.kind_label());
                Vec::new()
            }
        }
    }

    async fn backfill(
        &self,
        hadith: &Hadith,
        locale: &str,
        deadline: Instant,
        related: &mut Vec<Hadith>,
    ) -> Result<(), DomainError> {
        let config = self.config();
        let listed = with_deadline(
            deadline,
            self.api
                .list_by_collection(&hadith.collection, locale, config.backfill_limit),
        )
        .await?;

        let mut taken: HashSet<HadithId> = related.iter().map(|h| h.id).collect();
        taken.insert(hadith.id);

        for candidate in listed {
            if related.len() >= config.max_results {
                break;
            }

            if taken.insert(candidate.id) {
                related.push(candidate);
            }
        }

        debug!(count = related.len(), "Backfilled related hadiths from collection");
        Ok(())
    }
}

async fn with_deadline<T>(
    deadline: Instant,
    call: impl Future<Output = Result<T, DomainError>>,
) -> Result<T, DomainError> {
    tokio::time::timeout_at(deadline, call)
        .await
        .map_err(|_| DomainError::timeout("Deadline elapsed before the hadith API answered"))?
}
