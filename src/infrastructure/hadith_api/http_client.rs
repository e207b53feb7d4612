//! HTTP client for the hadith content API

use std::fmt;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::config::HadithApiConfig;
use crate::domain::hadith::{Hadith, HadithApi, HadithId};
use crate::domain::DomainError;

const API_KEY_HEADER: &str = "x-api-key";
const MAX_ERROR_BODY_LEN: usize = 200;

/// Every content API response wraps its payload in `data`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Content API client using reqwest
#[derive(Clone)]
pub struct HttpHadithApi {
    client: reqwest::Client,
    base_url: Url,
    config: HadithApiConfig,
}

impl fmt::Debug for HttpHadithApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpHadithApi")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_ms", &self.config.timeout_ms)
            .field("api_key", &self.config.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpHadithApi {
    pub fn new(config: HadithApiConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::configuration(format!(
                "Invalid hadith API base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Hadith API base URL '{}' cannot be used as a base",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    /// Issues a GET and decodes the envelope; `Ok(None)` on 404
    async fn get_data<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Option<T>, DomainError> {
        debug!(url = %url, "Calling hadith API");

        let mut request = self.client.get(url.clone()).query(query);

        if let Some(api_key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::upstream_status(
                status.as_u16(),
                format!("{} returned {}: {}", url.path(), status, truncate(&body)),
            ));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            DomainError::decode(format!("Invalid response from {}: {}", url.path(), e))
        })?;

        Ok(Some(envelope.data))
    }

    /// Like `get_data`, but a 404 on a listing endpoint is an upstream error
    async fn get_list(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Vec<Hadith>, DomainError> {
        let path = url.path().to_string();

        self.get_data(url, query)
            .await?
            .ok_or_else(|| DomainError::upstream_status(404, format!("{} not found", path)))
    }
}

#[async_trait]
impl HadithApi for HttpHadithApi {
    async fn search(
        &self,
        query: &str,
        locale: &str,
        limit: usize,
    ) -> Result<Vec<Hadith>, DomainError> {
        let url = self.endpoint(&["hadiths", "search"]);
        let params = [
            ("q", query.to_string()),
            ("lang", locale.to_string()),
            ("limit", limit.to_string()),
        ];

        self.get_list(url, &params).await
    }

    async fn list_by_collection(
        &self,
        collection: &str,
        locale: &str,
        limit: usize,
    ) -> Result<Vec<Hadith>, DomainError> {
        let url = self.endpoint(&["collections", collection, "hadiths"]);
        let params = [("lang", locale.to_string()), ("limit", limit.to_string())];

        self.get_list(url, &params).await
    }

    async fn get_hadith(
        &self,
        id: HadithId,
        locale: &str,
    ) -> Result<Option<Hadith>, DomainError> {
        let url = self.endpoint(&["hadiths", &id.to_string()]);
        let params = [("lang", locale.to_string())];

        self.get_data(url, &params).await
    }
}

fn map_transport_error(error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::timeout(format!("Hadith API request timed out: {}", error))
    } else if error.is_decode() {
        DomainError::decode(format!("Failed to read hadith API response: {}", error))
    } else {
        DomainError::network(format!("Hadith API request failed: {}", error))
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
