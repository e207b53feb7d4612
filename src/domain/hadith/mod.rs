//! Hadith entities and the content API boundary

mod entity;
mod locale;
mod repository;

pub use entity::{Hadith, HadithId, Translation};
pub use locale::normalize_locale;
pub use repository::HadithApi;

#[cfg(test)]
pub use repository::MockHadithApi;
