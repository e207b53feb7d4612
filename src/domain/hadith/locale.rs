//! Locale tags accepted by the content API

use crate::domain::DomainError;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 10;

/// Lower-cases and checks a short language tag such as `en` or `pt-br`
pub fn normalize_locale(raw: &str) -> Result<String, DomainError> {
    let locale = raw.trim().to_ascii_lowercase();

    let valid_len = (MIN_LEN..=MAX_LEN).contains(&locale.len());
    let valid_chars = locale.chars().all(|c| c.is_ascii_alphabetic() || c == '-');

    if !valid_len || !valid_chars || locale.starts_with('-') || locale.ends_with('-') {
        return Err(DomainError::validation(format!(
            "Invalid locale '{}': expected a language tag like 'en' or 'pt-br'",
            raw
        )));
    }

    Ok(locale)
}
