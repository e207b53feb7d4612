//! Cache key construction

use std::fmt::Display;

use crate::domain::hadith::HadithId;

/// Namespace for related-hadith lists
pub const RELATED_NAMESPACE: &str = "related";

/// Builds a namespaced key, e.g. `related:42`
pub fn namespaced_key(namespace: &str, id: impl Display) -> String {
    if namespace.is_empty() {
        id.to_string()
    } else {
        format!("{}:{}", namespace, id)
    }
}

/// Key of the related list for one hadith in one locale, e.g. `related:42:en`
pub fn related_key(id: HadithId, locale: &str) -> String {
    namespaced_key(RELATED_NAMESPACE, format!("{}:{}", id, locale))
}
