//! Application state for shared services

use std::fmt;
use std::sync::Arc;

use crate::domain::cache::Cache;
use crate::domain::hadith::HadithApi;
use crate::domain::related::RelatedConfig;
use crate::infrastructure::services::RelatedHadithsResolver;

/// Shared handles for request handlers
#[derive(Clone)]
pub struct AppState {
    pub hadith_api: Arc<dyn HadithApi>,
    pub cache: Arc<dyn Cache>,
    pub resolver: Arc<RelatedHadithsResolver>,
    /// Locale used when a request does not name one
    pub default_locale: String,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("cache", &self.cache.backend_name())
            .field("resolver", &self.resolver)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

impl AppState {
    /// Wires the resolver to the same API client and cache the handlers use
    pub fn new(
        hadith_api: Arc<dyn HadithApi>,
        cache: Arc<dyn Cache>,
        related: RelatedConfig,
        default_locale: impl Into<String>,
    ) -> Self {
        let resolver = Arc::new(RelatedHadithsResolver::with_config(
            hadith_api.clone(),
            cache.clone(),
            related,
        ));

        Self {
            hadith_api,
            cache,
            resolver,
            default_locale: default_locale.into(),
        }
    }
}
