use crate::api::error::FetchError;
use crate::location::error::LocationError;
use thiserror::Error;

/// Everything that can go wrong while resolving the nearest place.
///
/// The first three variants come from the device location read; the rest from
/// the single nearest-place request that follows it.
#[derive(Debug, Error)]
pub enum ResolvePlaceError {
    #[error("Geolocation is not available on this platform")]
    GeolocationUnsupported,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Failed to read device location: {0}")]
    GeolocationFailed(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Nearest-place request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode nearest-place response from {0}")]
    Decode(String, #[source] serde_json::Error),
}

impl ResolvePlaceError {
    /// The HTTP status of a non-2xx nearest-place response, if that is what
    /// failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ResolvePlaceError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<LocationError> for ResolvePlaceError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Unsupported => ResolvePlaceError::GeolocationUnsupported,
            LocationError::PermissionDenied => ResolvePlaceError::PermissionDenied,
            LocationError::Failed(message) => ResolvePlaceError::GeolocationFailed(message),
        }
    }
}

impl From<FetchError> for ResolvePlaceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NetworkRequest(url, source) => {
                ResolvePlaceError::NetworkRequest(url, source)
            }
            FetchError::HttpStatus { url, status, body } => {
                ResolvePlaceError::HttpStatus { url, status, body }
            }
            FetchError::Decode(url, source) => ResolvePlaceError::Decode(url, source),
        }
    }
}
