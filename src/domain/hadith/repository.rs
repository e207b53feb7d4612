//! Content API trait

use async_trait::async_trait;

use super::{Hadith, HadithId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read access to the remote hadith content API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HadithApi: Send + Sync {
    /// Full-text search in the given locale, capped at `limit` results
    async fn search(
        &self,
        query: &str,
        locale: &str,
        limit: usize,
    ) -> Result<Vec<Hadith>, DomainError>;

    /// Lists hadiths of one collection in whatever order the API returns them
    async fn list_by_collection(
        &self,
        collection: &str,
        locale: &str,
        limit: usize,
    ) -> Result<Vec<Hadith>, DomainError>;

    /// Fetches a single hadith; `None` when the API does not know the id
    async fn get_hadith(&self, id: HadithId, locale: &str)
        -> Result<Option<Hadith>, DomainError>;
}
