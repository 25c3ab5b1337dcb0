//! Derived per-day forecast buckets produced by the aggregator.
//!
//! These are recomputed on every aggregation call and never persisted.

use crate::types::day_part::DayPart;
use crate::types::icon::IconState;
use crate::types::sample::WeatherSample;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Summary statistics for one non-empty [`DayPart`] of a day.
///
/// Statistic fields are `None` when no sample in the part defined the
/// underlying value; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSummary {
    /// The first sample falling in this part, in input order.
    pub representative: WeatherSample,
    /// Maximum of the defined temperatures in this part.
    pub temperature_high: Option<f64>,
    /// Minimum of the defined temperatures in this part.
    pub temperature_low: Option<f64>,
    /// Sum of the defined precipitation values in this part.
    pub precipitation_total_mm: Option<f64>,
    /// Arithmetic mean of the defined wind speeds in this part.
    pub wind_speed_avg_m_s: Option<f64>,
    /// Modal condition label, unset conditions counted under the fallback
    /// label, ties broken by first-seen order.
    pub dominant_condition: String,
    /// Icon for the dominant condition, day/night chosen by the part's
    /// start hour.
    pub icon: IconState,
}

/// All summarized parts of one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Summaries keyed by part; parts with no samples have no entry.
    pub parts: BTreeMap<DayPart, PartSummary>,
}

impl DayBucket {
    /// The summary for one part of this day, if any sample fell in it.
    pub fn part(&self, part: DayPart) -> Option<&PartSummary> {
        self.parts.get(&part)
    }

    /// Maximum of the defined per-part temperature highs across the day.
    pub fn temperature_high(&self) -> Option<f64> {
        self.parts
            .values()
            .filter_map(|p| p.temperature_high)
            .fold(None, |acc, t| Some(acc.map_or(t, |a: f64| a.max(t))))
    }

    /// Minimum of the defined per-part temperature lows across the day.
    pub fn temperature_low(&self) -> Option<f64> {
        self.parts
            .values()
            .filter_map(|p| p.temperature_low)
            .fold(None, |acc, t| Some(acc.map_or(t, |a: f64| a.min(t))))
    }
}
