use serde::{Deserialize, Serialize};

/// Coarse departure/arrival bucket derived from an "HH:MM" string, used for
/// filtering and facet labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    LateNight,
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    Unknown,
}

impl TimeSlot {
    /// Bucket an "HH:MM" time string. Missing or unparseable input maps to
    /// `Unknown`, which never matches a filter and is excluded from facets.
    pub fn from_hhmm(time: &str) -> Self {
        let Some(hour_part) = time.split(':').next() else {
            return TimeSlot::Unknown;
        };
        let Ok(hour) = hour_part.trim().parse::<u32>() else {
            return TimeSlot::Unknown;
        };
        match hour {
            0..=2 => TimeSlot::LateNight,
            3..=5 => TimeSlot::EarlyMorning,
            6..=11 => TimeSlot::Morning,
            12..=17 => TimeSlot::Afternoon,
            18..=19 => TimeSlot::Evening,
            20..=23 => TimeSlot::Night,
            _ => TimeSlot::Unknown,
        }
    }

    /// Stable key used in filter query strings and facet values.
    pub fn key(&self) -> &'static str {
        match self {
            TimeSlot::LateNight => "late_night",
            TimeSlot::EarlyMorning => "early_morning",
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Night => "night",
            TimeSlot::Unknown => "unknown",
        }
    }

    /// Display label for filter UIs.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::LateNight => "Late Night (12AM - 3AM)",
            TimeSlot::EarlyMorning => "Early Morning (3AM - 6AM)",
            TimeSlot::Morning => "Morning (6AM - 12PM)",
            TimeSlot::Afternoon => "Afternoon (12PM - 6PM)",
            TimeSlot::Evening => "Evening (6PM - 8PM)",
            TimeSlot::Night => "Night (8PM - 12AM)",
            TimeSlot::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_hours() {
        assert_eq!(TimeSlot::from_hhmm("00:00"), TimeSlot::LateNight);
        assert_eq!(TimeSlot::from_hhmm("03:00"), TimeSlot::EarlyMorning);
        assert_eq!(TimeSlot::from_hhmm("05:30"), TimeSlot::EarlyMorning);
        assert_eq!(TimeSlot::from_hhmm("06:00"), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_hhmm("12:00"), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_hhmm("18:00"), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_hhmm("20:00"), TimeSlot::Night);
        assert_eq!(TimeSlot::from_hhmm("23:59"), TimeSlot::Night);
    }

    #[test]
    fn test_unparseable_input_is_unknown() {
        assert_eq!(TimeSlot::from_hhmm(""), TimeSlot::Unknown);
        assert_eq!(TimeSlot::from_hhmm("noon"), TimeSlot::Unknown);
        assert_eq!(TimeSlot::from_hhmm("25:00"), TimeSlot::Unknown);
    }

    #[test]
    fn test_keys_round_trip_labels() {
        let slots = [
            TimeSlot::LateNight,
            TimeSlot::EarlyMorning,
            TimeSlot::Morning,
            TimeSlot::Afternoon,
            TimeSlot::Evening,
            TimeSlot::Night,
        ];
        for slot in slots {
            assert_ne!(slot.key(), "unknown");
            assert!(!slot.label().is_empty());
        }
    }
}
