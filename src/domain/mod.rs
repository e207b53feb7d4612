//! Domain layer - Core entities, traits and scoring rules

pub mod cache;
pub mod error;
pub mod hadith;
pub mod related;

pub use cache::{Cache, CacheExt};
pub use error::{DomainError, UpstreamErrorKind};
pub use hadith::{Hadith, HadithApi, HadithId, Translation};
pub use related::{RelatedConfig, RelevanceScorer};
