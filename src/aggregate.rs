//! Pure aggregation of a flat hourly forecast into per-day, per-part buckets.

use crate::types::day_part::DayPart;
use crate::types::icon::{IconState, FALLBACK_CONDITION};
use crate::types::sample::WeatherSample;
use crate::types::summary::{DayBucket, PartSummary};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Buckets a time-ordered hourly forecast into calendar days and day-parts.
///
/// Samples with a timestamp before `reference` are dropped. Each remaining
/// sample lands in exactly one [`DayBucket`] (by local calendar date) and one
/// [`DayPart`] (by local hour); buckets are returned in ascending date order
/// and parts with no samples get no summary. Deterministic for a given input
/// and reference, performs no I/O, and leaves the input untouched.
///
/// # Examples
///
/// ```
/// use nearcast::{aggregate_by_day_and_part, DayPart, WeatherSample};
///
/// let samples: Vec<WeatherSample> = serde_json::from_str(
///     r#"[
///         {"datetime": "2024-01-01T05:00", "temperature_celsius": 10},
///         {"datetime": "2024-01-01T07:00", "temperature_celsius": 14}
///     ]"#,
/// )
/// .unwrap();
///
/// let buckets = aggregate_by_day_and_part(&samples, "2024-01-01T00:00:00".parse().unwrap());
/// assert_eq!(buckets.len(), 1);
/// let night = buckets[0].part(DayPart::Night).unwrap();
/// assert_eq!(night.temperature_high, Some(10.0));
/// assert!(buckets[0].part(DayPart::Afternoon).is_none());
/// ```
pub fn aggregate_by_day_and_part(
    samples: &[WeatherSample],
    reference: NaiveDateTime,
) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, BTreeMap<DayPart, Vec<&WeatherSample>>> = BTreeMap::new();

    for sample in samples.iter().filter(|s| s.datetime >= reference) {
        let part = DayPart::of_hour(sample.datetime.hour());
        days.entry(sample.datetime.date())
            .or_default()
            .entry(part)
            .or_default()
            .push(sample);
    }

    days.into_iter()
        .map(|(date, parts)| DayBucket {
            date,
            parts: parts
                .into_iter()
                .map(|(part, part_samples)| (part, summarize_part(part, &part_samples)))
                .collect(),
        })
        .collect()
}

fn summarize_part(part: DayPart, samples: &[&WeatherSample]) -> PartSummary {
    debug_assert!(!samples.is_empty(), "empty parts get no summary");

    let temperatures: Vec<f64> = samples
        .iter()
        .filter_map(|s| s.temperature_celsius)
        .collect();
    let temperature_high = temperatures.iter().copied().fold(None, |acc, t| {
        Some(acc.map_or(t, |a: f64| a.max(t)))
    });
    let temperature_low = temperatures.iter().copied().fold(None, |acc, t| {
        Some(acc.map_or(t, |a: f64| a.min(t)))
    });

    let precipitation: Vec<f64> = samples
        .iter()
        .filter_map(|s| s.total_precipitation_mm)
        .collect();
    let precipitation_total_mm = if precipitation.is_empty() {
        None
    } else {
        Some(precipitation.iter().sum())
    };

    let wind_speeds: Vec<f64> = samples.iter().filter_map(|s| s.wind_speed_m_s).collect();
    let wind_speed_avg_m_s = if wind_speeds.is_empty() {
        None
    } else {
        Some(wind_speeds.iter().sum::<f64>() / wind_speeds.len() as f64)
    };

    let dominant_condition = dominant_condition(samples);
    let icon = IconState::from_condition(&dominant_condition, part.is_daytime());

    PartSummary {
        representative: (*samples[0]).clone(),
        temperature_high,
        temperature_low,
        precipitation_total_mm,
        wind_speed_avg_m_s,
        dominant_condition,
        icon,
    }
}

/// Modal condition label across the part's samples.
///
/// Unset conditions count under the fallback label. A tie goes to whichever
/// label reached the winning count first in input order, keeping the result
/// independent of hash ordering.
fn dominant_condition(samples: &[&WeatherSample]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for sample in samples {
        let label = sample
            .weather_condition
            .as_deref()
            .unwrap_or(FALLBACK_CONDITION);
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(label, _)| (*label).to_string())
        .unwrap_or_else(|| FALLBACK_CONDITION.to_string())
}
