//! Related-hadith domain - Scoring, configuration and cached results

mod config;
mod entry;
mod scorer;

pub use config::RelatedConfig;
pub use entry::RelatedCacheEntry;
pub use scorer::{merge_candidates, RelatedSignals, RelevanceScorer, ScoredCandidate};
