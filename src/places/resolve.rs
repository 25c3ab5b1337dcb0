//! Resolves the device's position to the nearest known place.

use crate::api::client::ApiClient;
use crate::location::provider::LocationProvider;
use crate::places::error::ResolvePlaceError;
use crate::types::place::PlaceRef;

/// Resolves the current device position to the nearest place.
///
/// Reads the position from `provider` once, then issues exactly one
/// nearest-place request; the location read always precedes the network call,
/// and a location failure short-circuits without touching the network. No
/// automatic retry happens on any failure; re-invoking is the caller's retry
/// mechanism, and the caller is also responsible for not starting a second
/// resolution while one is in flight.
pub async fn resolve_nearest_place<P: LocationProvider>(
    provider: &P,
    api: &ApiClient,
    language: &str,
) -> Result<PlaceRef, ResolvePlaceError> {
    let coordinate = provider.current_position().await?;
    log::debug!(
        "Resolving nearest place for ({}, {})",
        coordinate.latitude,
        coordinate.longitude
    );
    let place = api.nearest_place(coordinate, language).await?;
    log::info!("Nearest place: {} ({})", place.name, place.place_slug);
    Ok(place)
}
