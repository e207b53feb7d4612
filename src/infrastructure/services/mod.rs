//! Infrastructure services

mod related_service;

pub use related_service::RelatedHadithsResolver;
