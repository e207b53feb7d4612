//! Hadith Reader
//!
//! Serves hadith records from a remote content API together with
//! related-hadith recommendations:
//! - narrator and keyword searches scored by a configurable heuristic
//! - same-collection backfill when too few candidates qualify
//! - per-hadith caching in memory (moka) or Redis
//! - a deadline on every upstream call

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::cache::CacheFactory;
use infrastructure::hadith_api::HttpHadithApi;
use tracing::info;

/// Create the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hadith_api = Arc::new(HttpHadithApi::new(config.hadith_api.clone())?);
    info!(base_url = %config.hadith_api.base_url, "Hadith API client configured");

    let cache = CacheFactory::new().create(&config.cache).await?;
    info!(backend = cache.backend_name(), "Cache backend ready");

    Ok(AppState::new(
        hadith_api,
        cache,
        config.related.clone(),
        config.server.default_locale.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_with_defaults() {
        let state = tokio_test::block_on(create_app_state(&AppConfig::default())).unwrap();

        assert_eq!(state.default_locale, "en");
        assert_eq!(state.cache.backend_name(), "in_memory");
        assert_eq!(state.resolver.config().max_results, 4);
    }

    #[test]
    fn test_create_app_state_rejects_bad_base_url() {
        let mut config = AppConfig::default();
        config.hadith_api.base_url = "not a url".to_string();

        assert!(tokio_test::block_on(create_app_state(&config)).is_err());
    }
}
