//! Defines the `IconState` enum and the classification from free-text weather
//! condition labels to a renderable icon variant.

use serde::{Deserialize, Serialize};

/// Condition label assumed when a sample carries no `weather_condition`.
pub const FALLBACK_CONDITION: &str = "cloudy";

/// A renderable weather icon variant.
///
/// This is a closed enumeration: every condition string classifies to some
/// variant, with [`IconState::Cloudy`] as the fallback for unrecognized input.
/// The string form ([`IconState::as_str`]) matches the icon keys used by the
/// display layer (`"sunny"`, `"clear-night"`, `"partlycloudy-night"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconState {
    Sunny,
    ClearNight,
    Partlycloudy,
    PartlycloudyNight,
    #[default]
    Cloudy,
    Fog,
    Rain,
    Snow,
    Sleet,
    Wind,
    Thunder,
}

impl IconState {
    /// Classifies a free-text weather condition into an icon variant.
    ///
    /// The condition is lowercased and tested for substring membership against
    /// a fixed list of keyword categories, in priority order: clear, partly
    /// cloudy, cloudy, rain, snow, sleet, wind, fog, thunder. The first match
    /// wins, so "Heavy Thunder Showers" stays [`IconState::Thunder`] and
    /// "Partly Cloudy" is never swallowed by the plain "cloudy" keyword.
    ///
    /// "clear" and "partly cloudy" select between a day and a night variant via
    /// `is_daytime`; the remaining categories are time-invariant. Unrecognized
    /// or empty input falls back to [`IconState::Cloudy`]; this function never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use nearcast::IconState;
    ///
    /// assert_eq!(IconState::from_condition("Clear", true), IconState::Sunny);
    /// assert_eq!(IconState::from_condition("Clear", false), IconState::ClearNight);
    /// assert_eq!(IconState::from_condition("Heavy Thunder Showers", true), IconState::Thunder);
    /// assert_eq!(IconState::from_condition("", true), IconState::Cloudy);
    /// ```
    pub fn from_condition(condition: &str, is_daytime: bool) -> Self {
        let condition = condition.to_lowercase();

        if condition.contains("clear") {
            if is_daytime {
                IconState::Sunny
            } else {
                IconState::ClearNight
            }
        } else if condition.contains("partly cloudy") {
            if is_daytime {
                IconState::Partlycloudy
            } else {
                IconState::PartlycloudyNight
            }
        } else if condition.contains("cloudy") {
            IconState::Cloudy
        } else if condition.contains("rain") {
            IconState::Rain
        } else if condition.contains("snow") {
            IconState::Snow
        } else if condition.contains("sleet") {
            IconState::Sleet
        } else if condition.contains("wind") {
            IconState::Wind
        } else if condition.contains("fog") {
            IconState::Fog
        } else if condition.contains("thunder") {
            IconState::Thunder
        } else {
            IconState::Cloudy
        }
    }

    /// The icon key understood by the display layer.
    pub fn as_str(self) -> &'static str {
        match self {
            IconState::Sunny => "sunny",
            IconState::ClearNight => "clear-night",
            IconState::Partlycloudy => "partlycloudy",
            IconState::PartlycloudyNight => "partlycloudy-night",
            IconState::Cloudy => "cloudy",
            IconState::Fog => "fog",
            IconState::Rain => "rain",
            IconState::Snow => "snow",
            IconState::Sleet => "sleet",
            IconState::Wind => "wind",
            IconState::Thunder => "thunder",
        }
    }
}

impl std::fmt::Display for IconState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_selects_day_night_variant() {
        assert_eq!(IconState::from_condition("Clear", true), IconState::Sunny);
        assert_eq!(
            IconState::from_condition("Clear", false),
            IconState::ClearNight
        );
    }

    #[test]
    fn partly_cloudy_beats_cloudy() {
        assert_eq!(
            IconState::from_condition("Partly Cloudy", true),
            IconState::Partlycloudy
        );
        assert_eq!(
            IconState::from_condition("Partly Cloudy", false),
            IconState::PartlycloudyNight
        );
        assert_eq!(IconState::from_condition("Cloudy", false), IconState::Cloudy);
    }

    #[test]
    fn first_matching_keyword_wins() {
        // "rain" appears before "thunder" in the priority order, but this
        // label contains no earlier keyword, so it classifies as thunder.
        assert_eq!(
            IconState::from_condition("Heavy Thunder Showers", true),
            IconState::Thunder
        );
        // Contains both "rain" and "thunder": rain has priority.
        assert_eq!(
            IconState::from_condition("Thundery rain showers", true),
            IconState::Rain
        );
    }

    #[test]
    fn total_for_arbitrary_input() {
        for garbage in ["", "xyz123", "  ", "τρικυμία", "\u{0}"] {
            assert_eq!(IconState::from_condition(garbage, true), IconState::Cloudy);
            assert_eq!(IconState::from_condition(garbage, false), IconState::Cloudy);
        }
    }

    #[test]
    fn time_invariant_categories() {
        for condition in ["rain", "snow", "sleet", "wind", "fog", "thunder"] {
            assert_eq!(
                IconState::from_condition(condition, true),
                IconState::from_condition(condition, false),
                "{condition} should not depend on the day flag"
            );
        }
    }

    #[test]
    fn string_form_matches_icon_keys() {
        assert_eq!(IconState::ClearNight.as_str(), "clear-night");
        assert_eq!(IconState::PartlycloudyNight.as_str(), "partlycloudy-night");
        assert_eq!(IconState::default().as_str(), "cloudy");
    }
}
