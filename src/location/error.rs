use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation is not available on this platform")]
    Unsupported,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location read failed: {0}")]
    Failed(String),
}
