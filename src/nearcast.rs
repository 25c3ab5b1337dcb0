//! The main entry point: a client tying together device geolocation, the
//! backend REST endpoints and the persistent last-place cache.

use crate::aggregate::aggregate_by_day_and_part;
use crate::api::client::ApiClient;
use crate::error::NearcastError;
use crate::location::provider::LocationProvider;
use crate::places::cache::PlaceCache;
use crate::places::resolve;
use crate::types::municipality::Municipality;
use crate::types::place::PlaceRef;
use crate::types::sample::{DailyForecastResponse, ForecastResponse};
use crate::types::summary::DayBucket;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Language used when an operation doesn't specify one.
const DEFAULT_LANGUAGE: &str = "en";

/// Client for a weather & geography backend.
///
/// Handles nearest-place resolution from device coordinates, hourly and daily
/// forecast fetches, municipality listings, and day-part aggregation of hourly
/// forecasts. A successfully resolved place is remembered in a persistent
/// cache so the next startup can render it immediately (see
/// [`Nearcast::cached_place`]).
///
/// Create an instance with [`Nearcast::new`] for the default cache directory
/// or [`Nearcast::with_cache_folder`] to control where the cache lives.
///
/// All fetching operations are plain async request/response calls: no retries,
/// no background work, at most one request in flight per call. Two overlapping
/// calls from the same caller are not coordinated here; last write wins on
/// whatever state the caller stores results in.
///
/// # Examples
///
/// ```no_run
/// # use nearcast::{Coordinate, FixedLocation, Nearcast, NearcastError};
/// # async fn run() -> Result<(), NearcastError> {
/// let client = Nearcast::new("https://api.example.org").await?;
///
/// let here = FixedLocation(Coordinate { latitude: 37.98, longitude: 23.73 });
/// let place = client
///     .resolve_nearest_place()
///     .provider(&here)
///     .language("el")
///     .call()
///     .await?;
/// println!("nearest place: {} -> {}", place.name, place.route_path());
/// # Ok(())
/// # }
/// ```
pub struct Nearcast {
    api: ApiClient,
    place_cache: PlaceCache,
}

#[bon]
impl Nearcast {
    /// Creates a client with a specific cache directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`NearcastError::CacheDirCreation`] if the directory cannot be
    /// created.
    pub async fn with_cache_folder(
        base_url: impl Into<String>,
        cache_folder: PathBuf,
    ) -> Result<Self, NearcastError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| NearcastError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            api: ApiClient::new(base_url),
            place_cache: PlaceCache::new(&cache_folder),
        })
    }

    /// Creates a client using the default per-user cache directory
    /// (e.g. `~/.cache/nearcast_cache` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`NearcastError::CacheDirResolution`] if the platform has no
    /// cache directory, or [`NearcastError::CacheDirCreation`] if it cannot
    /// be created.
    pub async fn new(base_url: impl Into<String>) -> Result<Self, NearcastError> {
        let cache_folder = get_cache_dir().map_err(NearcastError::CacheDirResolution)?;
        Self::with_cache_folder(base_url, cache_folder).await
    }

    /// Resolves the device's position to the nearest known place.
    ///
    /// Reads coordinates from the provider, then issues one nearest-place
    /// request; the location read always happens first, and a denied or failed
    /// read never touches the network. On success the place is also written to
    /// the persistent cache (best effort: a cache write failure is logged, not
    /// raised). Errors never update the cache.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.provider(&impl LocationProvider)`: **Required.** The device
    ///   location source.
    /// * `.language(&str)`: Optional. Language code for the endpoint path and
    ///   `Accept-Language` header, passed through unvalidated. Defaults to
    ///   `"en"`.
    ///
    /// # Errors
    ///
    /// Returns [`NearcastError::Resolve`] carrying the specific
    /// [`ResolvePlaceError`](crate::ResolvePlaceError): a geolocation failure
    /// (`GeolocationUnsupported`, `PermissionDenied`, `GeolocationFailed`), a
    /// transport or non-2xx response (`NetworkRequest`, `HttpStatus` with
    /// status and body), or an undecodable body (`Decode`).
    #[builder]
    pub async fn resolve_nearest_place<P: LocationProvider>(
        &self,
        provider: &P,
        language: Option<&str>,
    ) -> Result<PlaceRef, NearcastError> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        let place = resolve::resolve_nearest_place(provider, &self.api, language).await?;
        if let Err(e) = self.place_cache.store(&place).await {
            log::warn!("Could not cache resolved place: {e}");
        }
        Ok(place)
    }

    /// The last successfully resolved place, if one is cached on disk.
    ///
    /// Advisory only: a fresh resolution in the same session supersedes it.
    /// Intended for rendering something immediately at startup, before asking
    /// for location permission again.
    pub async fn cached_place(&self) -> Option<PlaceRef> {
        self.place_cache.load().await
    }

    /// Fetches the hourly forecast for a place.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.place_slug(&str)`: **Required.** The place's URL slug.
    /// * `.language(&str)`: Optional. Defaults to `"en"`.
    ///
    /// # Errors
    ///
    /// Returns [`NearcastError::Fetch`] for transport failures, non-2xx
    /// responses (with status and body) and undecodable bodies.
    #[builder]
    pub async fn hourly(
        &self,
        place_slug: &str,
        language: Option<&str>,
    ) -> Result<ForecastResponse, NearcastError> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        Ok(self.api.hourly_weather(place_slug, language).await?)
    }

    /// Fetches the pre-aggregated daily forecast for a place.
    ///
    /// Same arguments and errors as [`Nearcast::hourly`].
    #[builder]
    pub async fn daily(
        &self,
        place_slug: &str,
        language: Option<&str>,
    ) -> Result<DailyForecastResponse, NearcastError> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        Ok(self.api.daily_weather(place_slug, language).await?)
    }

    /// Fetches the hourly forecast for a place and buckets it into calendar
    /// days and day-parts.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.place_slug(&str)`: **Required.** The place's URL slug.
    /// * `.language(&str)`: Optional. Defaults to `"en"`.
    /// * `.reference(NaiveDateTime)`: Optional. Samples before this instant
    ///   are dropped. Defaults to the current local time.
    ///
    /// # Errors
    ///
    /// Same as [`Nearcast::hourly`]; the aggregation itself cannot fail.
    #[builder]
    pub async fn forecast_by_day(
        &self,
        place_slug: &str,
        language: Option<&str>,
        reference: Option<NaiveDateTime>,
    ) -> Result<Vec<DayBucket>, NearcastError> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        let forecast = self.api.hourly_weather(place_slug, language).await?;
        let reference = reference.unwrap_or_else(|| chrono::Local::now().naive_local());
        Ok(aggregate_by_day_and_part(&forecast.weather_data, reference))
    }

    /// Lists all municipalities, names localized to the requested language.
    ///
    /// This method uses a builder pattern; `.language(&str)` is optional and
    /// defaults to `"en"`.
    ///
    /// # Errors
    ///
    /// Returns [`NearcastError::Fetch`] for transport failures, non-2xx
    /// responses and undecodable bodies.
    #[builder]
    pub async fn municipalities(
        &self,
        language: Option<&str>,
    ) -> Result<Vec<Municipality>, NearcastError> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        Ok(self.api.municipalities(language).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::error::LocationError;
    use crate::location::provider::{Coordinate, FixedLocation};
    use crate::places::error::ResolvePlaceError;
    use chrono::NaiveDateTime;
    use std::future::Future;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct DeniedLocation;

    impl LocationProvider for DeniedLocation {
        fn current_position(
            &self,
        ) -> impl Future<Output = Result<Coordinate, LocationError>> + Send {
            std::future::ready(Err(LocationError::PermissionDenied))
        }
    }

    fn place_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Vyronas",
            "description": null,
            "latitude": 37.9617,
            "longitude": 23.7532,
            "elevation": 180.0,
            "continent_slug": "europe",
            "country_slug": "greece",
            "region_slug": "attica",
            "municipality_slug": "municipality-of-vyronas",
            "municipality_name": "Municipality of Vyronas",
            "place_slug": "vyronas"
        })
    }

    fn here() -> FixedLocation {
        FixedLocation(Coordinate {
            latitude: 37.9617,
            longitude: 23.7532,
        })
    }

    async fn client_for(server: &MockServer) -> (Nearcast, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let client = Nearcast::with_cache_folder(server.uri(), dir.path().to_path_buf())
            .await
            .unwrap();
        (client, dir)
    }

    #[tokio::test]
    async fn successful_resolution_writes_the_place_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/el/api/place/"))
            .and(query_param("latitude", "37.9617"))
            .respond_with(ResponseTemplate::new(200).set_body_json(place_body()))
            .mount(&server)
            .await;

        let (client, _dir) = client_for(&server).await;
        assert!(client.cached_place().await.is_none());

        let place = client
            .resolve_nearest_place()
            .provider(&here())
            .language("el")
            .call()
            .await
            .unwrap();
        assert_eq!(place.name, "Vyronas");

        // A later startup sees the cached value without any location read.
        assert_eq!(client.cached_place().await, Some(place));
    }

    #[tokio::test]
    async fn http_500_reports_status_and_leaves_cache_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/en/api/place/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let (client, _dir) = client_for(&server).await;
        let err = client
            .resolve_nearest_place()
            .provider(&here())
            .call()
            .await
            .unwrap_err();

        match err {
            NearcastError::Resolve(ResolvePlaceError::HttpStatus { status, body, .. }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert!(client.cached_place().await.is_none());
    }

    #[tokio::test]
    async fn denied_permission_surfaces_without_network_or_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(place_body()))
            .expect(0)
            .mount(&server)
            .await;

        let (client, _dir) = client_for(&server).await;
        let err = client
            .resolve_nearest_place()
            .provider(&DeniedLocation)
            .call()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NearcastError::Resolve(ResolvePlaceError::PermissionDenied)
        ));
        assert!(client.cached_place().await.is_none());
    }

    #[tokio::test]
    async fn fresh_resolution_supersedes_cached_place() {
        let server = MockServer::start().await;
        let mut other = place_body();
        other["name"] = serde_json::json!("Karpenisi");
        other["place_slug"] = serde_json::json!("karpenisi");
        Mock::given(method("GET"))
            .and(path("/en/api/place/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(other))
            .mount(&server)
            .await;

        let (client, _dir) = client_for(&server).await;
        // Seed the cache as if a previous session resolved Vyronas.
        let previous: PlaceRef = serde_json::from_value(place_body()).unwrap();
        client.place_cache.store(&previous).await.unwrap();

        client
            .resolve_nearest_place()
            .provider(&here())
            .call()
            .await
            .unwrap();
        assert_eq!(
            client.cached_place().await.map(|p| p.name),
            Some("Karpenisi".to_string())
        );
    }

    #[tokio::test]
    async fn forecast_by_day_buckets_the_fetched_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/en/api/weather/vyronas/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "place_name": "Vyronas",
                "weather_data": [
                    {"datetime": "2024-01-01T05:00:00", "temperature_celsius": 10.0},
                    {"datetime": "2024-01-01T07:00:00", "temperature_celsius": 14.0}
                ]
            })))
            .mount(&server)
            .await;

        let (client, _dir) = client_for(&server).await;
        let reference: NaiveDateTime = "2024-01-01T00:00:00".parse().unwrap();
        let buckets = client
            .forecast_by_day()
            .place_slug("vyronas")
            .reference(reference)
            .call()
            .await
            .unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].temperature_high(), Some(14.0));
        assert_eq!(buckets[0].temperature_low(), Some(10.0));
    }

    #[tokio::test]
    async fn municipalities_listing_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/en/api/municipalities/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 7, "name": "Municipality of Vyronas"}
            ])))
            .mount(&server)
            .await;

        let (client, _dir) = client_for(&server).await;
        let municipalities = client.municipalities().call().await.unwrap();
        assert_eq!(municipalities.len(), 1);
        assert_eq!(municipalities[0].id, 7);
    }
}
