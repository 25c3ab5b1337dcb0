//! Client for a weather & geography REST backend.
//!
//! Three pieces make up the crate:
//!
//! * **Nearest-place resolution** — read the device position from a
//!   [`LocationProvider`], ask the backend for the closest known place, and
//!   remember it in a persistent cache for the next startup.
//! * **Forecast aggregation** — bucket a flat hourly forecast into calendar
//!   days and four fixed day-parts (night/morning/afternoon/evening) with
//!   per-part summary statistics ([`aggregate_by_day_and_part`]).
//! * **Condition classification** — map free-text weather condition labels to
//!   a closed set of renderable icon variants ([`IconState`]).
//!
//! The [`Nearcast`] client ties them together over the backend's
//! `/{lang}/api/...` endpoints.

mod aggregate;
mod api;
mod error;
mod location;
mod nearcast;
mod places;
mod types;
mod utils;

pub use error::NearcastError;
pub use nearcast::Nearcast;

pub use aggregate::aggregate_by_day_and_part;
pub use api::client::ApiClient;
pub use api::error::FetchError;
pub use location::error::LocationError;
pub use location::provider::{Coordinate, FixedLocation, LocationProvider, NoLocation};
pub use places::cache::{PlaceCache, PlaceCacheError};
pub use places::error::ResolvePlaceError;
pub use places::resolve::resolve_nearest_place;

pub use types::day_part::DayPart;
pub use types::icon::{IconState, FALLBACK_CONDITION};
pub use types::municipality::Municipality;
pub use types::place::PlaceRef;
pub use types::sample::{DailyForecastResponse, DailySummary, ForecastResponse, WeatherSample};
pub use types::summary::{DayBucket, PartSummary};
