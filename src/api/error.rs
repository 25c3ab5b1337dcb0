use thiserror::Error;

/// Failure of one backend endpoint call.
///
/// Non-2xx responses keep the status and whatever body the server sent, so
/// the boundary can surface a useful message; transport and decode failures
/// keep their underlying error as source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode response body from {0}")]
    Decode(String, #[source] serde_json::Error),
}

impl FetchError {
    /// The HTTP status of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
