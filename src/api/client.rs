//! Thin typed client over the backend's REST endpoints.
//!
//! All endpoints share the `/{lang}/api/...` path shape and echo the language
//! in an `Accept-Language` header. The language code is passed through
//! unchanged; no validation happens here.

use crate::api::error::FetchError;
use crate::location::provider::Coordinate;
use crate::types::municipality::Municipality;
use crate::types::place::PlaceRef;
use crate::types::sample::{DailyForecastResponse, ForecastResponse};
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Typed access to the place, weather and municipality endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url` (scheme + host, with or
    /// without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// `GET {base}/{lang}/api/place/?latitude=..&longitude=..` — the place
    /// closest to `coordinate`.
    pub async fn nearest_place(
        &self,
        coordinate: Coordinate,
        language: &str,
    ) -> Result<PlaceRef, FetchError> {
        let url = format!(
            "{}/{}/api/place/?latitude={}&longitude={}",
            self.base_url, language, coordinate.latitude, coordinate.longitude
        );
        self.get_json(url, language).await
    }

    /// `GET {base}/{lang}/api/weather/{place_slug}/` — the hourly forecast for
    /// a place.
    pub async fn hourly_weather(
        &self,
        place_slug: &str,
        language: &str,
    ) -> Result<ForecastResponse, FetchError> {
        let url = format!(
            "{}/{}/api/weather/{}/",
            self.base_url, language, place_slug
        );
        self.get_json(url, language).await
    }

    /// `GET {base}/{lang}/api/weather/daily/{place_slug}/` — the pre-aggregated
    /// daily forecast for a place.
    pub async fn daily_weather(
        &self,
        place_slug: &str,
        language: &str,
    ) -> Result<DailyForecastResponse, FetchError> {
        let url = format!(
            "{}/{}/api/weather/daily/{}/",
            self.base_url, language, place_slug
        );
        self.get_json(url, language).await
    }

    /// `GET {base}/{lang}/api/municipalities/` — all municipalities, names
    /// localized to `language`.
    pub async fn municipalities(&self, language: &str) -> Result<Vec<Municipality>, FetchError> {
        let url = format!("{}/{}/api/municipalities/", self.base_url, language);
        self.get_json(url, language).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        language: &str,
    ) -> Result<T, FetchError> {
        log::debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .header(ACCEPT_LANGUAGE, language)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("GET {url} failed with status {status}");
            return Err(FetchError::HttpStatus { url, status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(url, e))
    }
}
