//! The device-location seam of the resolver.
//!
//! Platform geolocation (browser API, portal service, GPS daemon) lives behind
//! [`LocationProvider`] so the resolver can be exercised without hardware.

use crate::location::error::LocationError;
use std::future::Future;

/// A geographical coordinate produced by a location provider.
///
/// # Examples
///
/// ```
/// use nearcast::Coordinate;
///
/// let athens = Coordinate { latitude: 37.9838, longitude: 23.7275 };
/// assert!(athens.latitude > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Source of the device's current coordinates.
///
/// A read may be denied by the user, unavailable on the platform, or fail for
/// hardware/timeout reasons; each maps to a distinct [`LocationError`].
pub trait LocationProvider {
    /// Reads the current position once. No caching or retrying is implied.
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}

/// A provider that always reports one fixed coordinate.
///
/// Useful when the application already knows its position (configuration,
/// user choice) and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send {
        std::future::ready(Ok(self.0))
    }
}

/// A provider for platforms without any location capability.
#[derive(Debug, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send {
        std::future::ready(Err(LocationError::Unsupported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_location_returns_its_coordinate() {
        let provider = FixedLocation(Coordinate {
            latitude: 37.9838,
            longitude: 23.7275,
        });
        let position = provider.current_position().await.unwrap();
        assert_eq!(position.latitude, 37.9838);
        assert_eq!(position.longitude, 23.7275);
    }

    #[tokio::test]
    async fn no_location_reports_unsupported() {
        let result = NoLocation.current_position().await;
        assert!(matches!(result, Err(LocationError::Unsupported)));
    }
}
