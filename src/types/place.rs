//! The `PlaceRef` wire type returned by the nearest-place endpoint.

use serde::{Deserialize, Serialize};

/// A geographic point of interest as returned by the nearest-place endpoint.
///
/// The slug fields compose a hierarchical path
/// (continent/country/region/municipality/place) used for navigation; see
/// [`PlaceRef::route_path`]. A `PlaceRef` is immutable once fetched and may be
/// persisted in the client-side place cache across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub continent_slug: String,
    pub country_slug: String,
    pub region_slug: String,
    pub municipality_slug: String,
    #[serde(default)]
    pub municipality_name: Option<String>,
    pub place_slug: String,
}

impl PlaceRef {
    /// The canonical place-detail route for this place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nearcast::PlaceRef;
    /// # let place = PlaceRef {
    /// #     name: "Karpenisi".into(),
    /// #     description: None,
    /// #     latitude: 38.92,
    /// #     longitude: 21.79,
    /// #     elevation: 960.0,
    /// #     continent_slug: "europe".into(),
    /// #     country_slug: "greece".into(),
    /// #     region_slug: "central-greece".into(),
    /// #     municipality_slug: "municipality-of-karpenisi".into(),
    /// #     municipality_name: None,
    /// #     place_slug: "karpenisi".into(),
    /// # };
    /// assert_eq!(
    ///     place.route_path(),
    ///     "/europe/greece/central-greece/municipality-of-karpenisi/karpenisi/"
    /// );
    /// ```
    pub fn route_path(&self) -> String {
        format!(
            "/{}/{}/{}/{}/{}/",
            self.continent_slug,
            self.country_slug,
            self.region_slug,
            self.municipality_slug,
            self.place_slug
        )
    }
}
