//! Wire types for the weather endpoints: hourly forecast samples and the
//! daily-summary variant.
//!
//! All sensor/model fields are optional; an absent field means the value was
//! not reported, never zero.

use crate::types::icon::{IconState, FALLBACK_CONDITION};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One hourly forecast record for a place.
///
/// Timestamps are naive local time: the backend serves forecasts in the
/// place's own timezone and day/part bucketing is defined over the local
/// calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    #[serde(with = "local_datetime")]
    pub datetime: NaiveDateTime,
    #[serde(default)]
    pub temperature_celsius: Option<f64>,
    #[serde(default)]
    pub relative_humidity_percent: Option<f64>,
    #[serde(default)]
    pub wind_speed_m_s: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub total_precipitation_mm: Option<f64>,
    #[serde(default)]
    pub weather_condition: Option<String>,
}

impl WeatherSample {
    /// Whether this sample's hour falls in daylight ([06:00, 18:00) local).
    pub fn is_daytime(&self) -> bool {
        let hour = self.datetime.hour();
        (6..18).contains(&hour)
    }

    /// The icon variant for this sample's condition at this sample's hour.
    ///
    /// An unset condition classifies as the fallback label ("cloudy").
    pub fn icon_state(&self) -> IconState {
        let condition = self.weather_condition.as_deref().unwrap_or(FALLBACK_CONDITION);
        IconState::from_condition(condition, self.is_daytime())
    }
}

/// Response body of the hourly weather endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub place_name: String,
    pub weather_data: Vec<WeatherSample>,
}

impl ForecastResponse {
    /// The first (most current) sample of the forecast, if any.
    pub fn current(&self) -> Option<&WeatherSample> {
        self.weather_data.first()
    }
}

/// One pre-aggregated day of the daily-summary weather endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub avg_cloud_cover: Option<f64>,
    #[serde(default)]
    pub max_precipitation: Option<f64>,
    #[serde(default)]
    pub wind_speed_avg: Option<f64>,
}

/// Response body of the daily-summary weather endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastResponse {
    pub place_name: String,
    pub daily_weather_data: Vec<DailySummary>,
}

/// Serde helper for local timestamps.
///
/// The backend emits ISO timestamps, with or without a seconds component
/// depending on the serializer revision; accept both.
mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, FORMAT_NO_SECONDS))
            .map_err(serde::de::Error::custom)
    }
}
