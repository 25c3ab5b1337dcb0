//! Defines the `DayPart` enum: the four fixed six-hour windows used to bucket
//! hourly forecast samples for display.

use serde::{Deserialize, Serialize};

/// One of four fixed six-hour windows partitioning a 24-hour local day.
///
/// The windows are contiguous and non-overlapping, so every local hour belongs
/// to exactly one part:
///
/// | Part      | Hours          |
/// |-----------|----------------|
/// | Night     | [00:00, 06:00) |
/// | Morning   | [06:00, 12:00) |
/// | Afternoon | [12:00, 18:00) |
/// | Evening   | [18:00, 24:00) |
///
/// # Examples
///
/// ```
/// use nearcast::DayPart;
///
/// assert_eq!(DayPart::of_hour(5), DayPart::Night);
/// assert_eq!(DayPart::of_hour(6), DayPart::Morning);
/// assert!(DayPart::Afternoon.is_daytime());
/// assert!(!DayPart::Evening.is_daytime());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// All parts in chronological order within a day.
    pub const ALL: [DayPart; 4] = [
        DayPart::Night,
        DayPart::Morning,
        DayPart::Afternoon,
        DayPart::Evening,
    ];

    /// Returns the part containing the given local hour (0..=23).
    ///
    /// Hours of 24 or more are clamped into the evening window rather than
    /// panicking; valid `chrono` hours never reach that branch.
    pub fn of_hour(hour: u32) -> Self {
        match hour {
            0..=5 => DayPart::Night,
            6..=11 => DayPart::Morning,
            12..=17 => DayPart::Afternoon,
            _ => DayPart::Evening,
        }
    }

    /// The first hour of the window.
    pub fn start_hour(self) -> u32 {
        match self {
            DayPart::Night => 0,
            DayPart::Morning => 6,
            DayPart::Afternoon => 12,
            DayPart::Evening => 18,
        }
    }

    /// Whether the window starts during daylight hours ([06:00, 18:00)).
    ///
    /// Used to pick day/night icon variants for a whole part.
    pub fn is_daytime(self) -> bool {
        let start = self.start_hour();
        (6..18).contains(&start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hour_maps_to_exactly_one_part() {
        for hour in 0..24 {
            let part = DayPart::of_hour(hour);
            let matching = DayPart::ALL
                .iter()
                .filter(|p| DayPart::of_hour(hour) == **p)
                .count();
            assert_eq!(matching, 1, "hour {hour} mapped to {part:?}");
        }
    }

    #[test]
    fn window_edges() {
        assert_eq!(DayPart::of_hour(0), DayPart::Night);
        assert_eq!(DayPart::of_hour(5), DayPart::Night);
        assert_eq!(DayPart::of_hour(6), DayPart::Morning);
        assert_eq!(DayPart::of_hour(11), DayPart::Morning);
        assert_eq!(DayPart::of_hour(12), DayPart::Afternoon);
        assert_eq!(DayPart::of_hour(17), DayPart::Afternoon);
        assert_eq!(DayPart::of_hour(18), DayPart::Evening);
        assert_eq!(DayPart::of_hour(23), DayPart::Evening);
    }

    #[test]
    fn daytime_flag_follows_start_hour() {
        assert!(!DayPart::Night.is_daytime());
        assert!(DayPart::Morning.is_daytime());
        assert!(DayPart::Afternoon.is_daytime());
        assert!(!DayPart::Evening.is_daytime());
    }
}
