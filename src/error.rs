use crate::api::error::FetchError;
use crate::places::error::ResolvePlaceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NearcastError {
    #[error(transparent)]
    Resolve(#[from] ResolvePlaceError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),
}
