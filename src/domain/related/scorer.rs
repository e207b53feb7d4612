//! Relevance scoring for related-hadith candidates

use std::cmp::Ordering;
use std::collections::HashSet;

use super::config::RelatedConfig;
use crate::domain::hadith::{Hadith, HadithId};

/// Query signals derived from the subject hadith
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedSignals {
    /// Narrator named by the subject's translation
    pub narrator: Option<String>,
    /// Leading words of the subject's translated text
    pub keywords: Vec<String>,
}

impl RelatedSignals {
    /// Extracts the narrator and the first `keyword_count` words of the translation
    pub fn from_hadith(hadith: &Hadith, keyword_count: usize) -> Self {
        let narrator = hadith.narrator().map(str::to_string);
        let keywords = hadith
            .translated_text()
            .map(|text| {
                text.split_whitespace()
                    .take(keyword_count)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { narrator, keywords }
    }

    /// Search phrase built from the keywords, if there are any
    pub fn keyword_phrase(&self) -> Option<String> {
        if self.keywords.is_empty() {
            None
        } else {
            Some(self.keywords.join(" "))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.narrator.is_none() && self.keywords.is_empty()
    }
}

/// A candidate paired with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub hadith: Hadith,
    pub score: f64,
}

/// Heuristic scorer combining narrator, collection and keyword overlap
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    config: RelatedConfig,
}

impl RelevanceScorer {
    pub fn new(config: RelatedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelatedConfig {
        &self.config
    }

    /// Scores one candidate against the subject
    pub fn score(&self, subject: &Hadith, signals: &RelatedSignals, candidate: &Hadith) -> f64 {
        let mut score = 0.0;

        if let Some(narrator) = signals.narrator.as_deref() {
            if candidate.narrator() == Some(narrator) {
                score += self.config.narrator_weight;
            }
        }

        if candidate.collection == subject.collection {
            score += self.config.collection_weight;

            if self.is_nearby(subject, candidate) {
                score += self.config.proximity_weight;
            }
        }

        score + self.keyword_score(signals, candidate)
    }

    /// Scores all candidates, drops those under the threshold and keeps the best
    ///
    /// Ties keep their input order.
    pub fn rank(
        &self,
        subject: &Hadith,
        signals: &RelatedSignals,
        candidates: Vec<Hadith>,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|hadith| {
                let score = self.score(subject, signals, &hadith);
                ScoredCandidate { hadith, score }
            })
            .filter(|candidate| candidate.score >= self.config.min_score)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.config.max_results);
        scored
    }

    fn is_nearby(&self, subject: &Hadith, candidate: &Hadith) -> bool {
        match (subject.number_value(), candidate.number_value()) {
            (Some(a), Some(b)) => (a - b).abs() < self.config.proximity_window,
            _ => false,
        }
    }

    fn keyword_score(&self, signals: &RelatedSignals, candidate: &Hadith) -> f64 {
        if signals.keywords.is_empty() {
            return 0.0;
        }

        let Some(text) = candidate.translated_text() else {
            return 0.0;
        };

        let text = text.to_lowercase();
        let matched = signals
            .keywords
            .iter()
            .filter(|word| text.contains(&word.to_lowercase()))
            .count();

        let fraction = (matched as f64 / self.config.keyword_count as f64).min(1.0);
        fraction * self.config.keyword_weight
    }
}

/// Merges search batches into one pool without the subject or duplicate ids
///
/// The first occurrence of an id wins, so batch order is preserved.
pub fn merge_candidates<I>(subject_id: HadithId, batches: I) -> Vec<Hadith>
where
    I: IntoIterator<Item = Vec<Hadith>>,
{
    let mut seen = HashSet::new();
    seen.insert(subject_id);

    batches
        .into_iter()
        .flatten()
        .filter(|hadith| seen.insert(hadith.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hadith::Translation;

    const EPSILON: f64 = 1e-9;

    fn subject() -> Hadith {
        Hadith::new(42, "Sahih al-Bukhari", "100").with_translation(
            Translation::new("The best among you are those who learn the Quran")
                .with_narrator("Abu Huraira"),
        )
    }

    fn scorer() -> RelevanceScorer {
        RelevanceScorer::new(RelatedConfig::default())
    }

    #[test]
    fn test_signals_from_hadith() {
        let signals = RelatedSignals::from_hadith(&subject(), 5);

        assert_eq!(signals.narrator.as_deref(), Some("Abu Huraira"));
        assert_eq!(signals.keywords, vec!["The", "best", "among", "you", "are"]);
        assert_eq!(
            signals.keyword_phrase().as_deref(),
            Some("The best among you are")
        );
    }

    #[test]
    fn test_signals_without_translation() {
        let signals = RelatedSignals::from_hadith(&Hadith::new(1, "Sahih Muslim", "1"), 5);

        assert!(signals.is_empty());
        assert!(signals.keyword_phrase().is_none());
    }

    #[test]
    fn test_signals_short_text() {
        let hadith = Hadith::new(1, "c", "1").with_translation(Translation::new("  Actions   are "));
        let signals = RelatedSignals::from_hadith(&hadith, 5);

        assert_eq!(signals.keywords, vec!["Actions", "are"]);
        assert!(signals.narrator.is_none());
    }

    #[test]
    fn test_same_collection_nearby_scores_point_four() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        let candidate = Hadith::new(7, "Sahih al-Bukhari", "105")
            .with_translation(Translation::new("Fasting is a shield").with_narrator("Aisha"));

        let score = scorer().score(&subject, &signals, &candidate);

        assert!((score - 0.4).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_same_collection_distant_scores_collection_only() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        let candidate = Hadith::new(7, "Sahih al-Bukhari", "110");

        let score = scorer().score(&subject, &signals, &candidate);

        assert!((score - 0.3).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_proximity_requires_same_collection() {
        let subject = subject();
        let signals = RelatedSignals::default();
        let candidate = Hadith::new(7, "Sahih Muslim", "101");

        assert_eq!(scorer().score(&subject, &signals, &candidate), 0.0);
    }

    #[test]
    fn test_narrator_match() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        let candidate = Hadith::new(7, "Sunan Abi Dawud", "1")
            .with_translation(Translation::new("Unrelated words").with_narrator("Abu Huraira"));

        let score = scorer().score(&subject, &signals, &candidate);

        assert!((score - 0.2).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_narrator_must_match_exactly() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        let candidate = Hadith::new(7, "Sunan Abi Dawud", "1")
            .with_translation(Translation::new("Unrelated words").with_narrator(" Abu Huraira "));

        assert_eq!(scorer().score(&subject, &signals, &candidate), 0.0);
    }

    #[test]
    fn test_keyword_overlap_is_case_insensitive_and_capped() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        let candidate = Hadith::new(7, "Sunan Abi Dawud", "1").with_translation(Translation::new(
            "THE BEST AMONG YOU ARE the ones who are kind",
        ));

        let score = scorer().score(&subject, &signals, &candidate);

        assert!((score - 0.5).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_keyword_partial_overlap() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        // "the", "you" and "are" appear; "best" and "among" do not
        let candidate = Hadith::new(7, "Sunan Abi Dawud", "1")
            .with_translation(Translation::new("Are you coming to the mosque"));

        let score = scorer().score(&subject, &signals, &candidate);

        assert!((score - 0.3).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_keyword_fraction_uses_configured_count() {
        let hadith = Hadith::new(1, "c", "1").with_translation(Translation::new("Actions are"));
        let signals = RelatedSignals::from_hadith(&hadith, 5);
        let candidate = Hadith::new(7, "other", "1")
            .with_translation(Translation::new("Actions are judged by intentions"));

        let score = scorer().score(&hadith, &signals, &candidate);

        // 2 of 5 keywords matched
        assert!((score - 0.2).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_maximum_score() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);
        let candidate = Hadith::new(7, "Sahih al-Bukhari", "101").with_translation(
            Translation::new("The best among you are those who are best to their families")
                .with_narrator("Abu Huraira"),
        );

        let score = scorer().score(&subject, &signals, &candidate);

        assert!((score - 1.1).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_rank_filters_sorts_and_truncates() {
        let subject = subject();
        let signals = RelatedSignals::from_hadith(&subject, 5);

        let candidates = vec![
            // 0.2: narrator only, dropped
            Hadith::new(1, "Sunan Abi Dawud", "1")
                .with_translation(Translation::new("x").with_narrator("Abu Huraira")),
            // 0.3: same collection, far
            Hadith::new(2, "Sahih al-Bukhari", "500"),
            // 0.4: same collection, near
            Hadith::new(3, "Sahih al-Bukhari", "95"),
            // 0.3: same collection, far (tie with 2, must stay after it)
            Hadith::new(4, "Sahih al-Bukhari", "900"),
            // 0.6: same collection, near, narrator
            Hadith::new(5, "Sahih al-Bukhari", "99")
                .with_translation(Translation::new("x").with_narrator("Abu Huraira")),
            // 0.3: same collection, far
            Hadith::new(6, "Sahih al-Bukhari", "1"),
        ];

        let ranked = scorer().rank(&subject, &signals, candidates);
        let ids: Vec<u64> = ranked.iter().map(|c| c.hadith.id.value()).collect();

        assert_eq!(ids, vec![5, 3, 2, 4]);
        assert!(ranked.iter().all(|c| c.score >= 0.3));
    }

    #[test]
    fn test_rank_threshold_is_inclusive() {
        let subject = subject();
        let ranked = scorer().rank(
            &subject,
            &RelatedSignals::default(),
            vec![Hadith::new(2, "Sahih al-Bukhari", "500")],
        );

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_custom_threshold() {
        let subject = subject();
        let scorer = RelevanceScorer::new(RelatedConfig::default().with_min_score(0.35));
        let ranked = scorer.rank(
            &subject,
            &RelatedSignals::default(),
            vec![
                Hadith::new(2, "Sahih al-Bukhari", "500"),
                Hadith::new(3, "Sahih al-Bukhari", "101"),
            ],
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].hadith.id, HadithId::new(3));
    }

    #[test]
    fn test_merge_candidates_removes_subject_and_duplicates() {
        let narrator_batch = vec![
            Hadith::new(1, "a", "1"),
            Hadith::new(42, "a", "2"),
            Hadith::new(2, "a", "3"),
        ];
        let keyword_batch = vec![Hadith::new(2, "a", "3"), Hadith::new(3, "a", "4")];

        let merged = merge_candidates(HadithId::new(42), [narrator_batch, keyword_batch]);
        let ids: Vec<u64> = merged.iter().map(|h| h.id.value()).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }
}
