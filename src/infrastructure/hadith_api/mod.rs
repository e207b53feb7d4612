//! Hadith content API client

mod config;
mod http_client;

pub use config::HadithApiConfig;
pub use http_client::HttpHadithApi;
