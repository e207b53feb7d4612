//! Cache domain - Generic caching abstraction layer

mod key;
mod repository;

pub use key::{namespaced_key, related_key, RELATED_NAMESPACE};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
