//! Infrastructure layer - External service implementations

pub mod cache;
pub mod hadith_api;
pub mod logging;
pub mod observability;
pub mod services;
