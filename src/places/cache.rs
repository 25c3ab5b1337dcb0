//! Persistent cache of the last successfully resolved place.
//!
//! A single JSON file under the crate's cache directory, written on every
//! successful resolution and read at startup so a UI can render the last
//! known place before asking for location permission again. The cached value
//! is advisory: no expiry, always superseded by a fresh resolution.

use crate::types::place::PlaceRef;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LAST_PLACE_FILE_NAME: &str = "last_place.json";

#[derive(Debug, Error)]
pub enum PlaceCacheError {
    #[error("Failed to serialize place for cache")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write place cache file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct PlaceCache {
    path: PathBuf,
}

impl PlaceCache {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            path: cache_dir.join(LAST_PLACE_FILE_NAME),
        }
    }

    /// Reads the last cached place, if a readable one exists.
    ///
    /// A missing or corrupt file is not an error, it just means no cached
    /// place; corruption is logged and the file will be overwritten by the
    /// next successful resolution.
    pub async fn load(&self) -> Option<PlaceRef> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::debug!("Could not read place cache {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(place) => Some(place),
            Err(e) => {
                log::warn!(
                    "Ignoring corrupt place cache {}: {e}",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Overwrites the cache with a freshly resolved place.
    pub async fn store(&self, place: &PlaceRef) -> Result<(), PlaceCacheError> {
        let json = serde_json::to_vec_pretty(place).map_err(PlaceCacheError::Serialize)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| PlaceCacheError::Write(self.path.clone(), e))?;
        log::debug!("Cached last place to {}", self.path.display());
        Ok(())
    }

    /// Whether a cache file currently exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
