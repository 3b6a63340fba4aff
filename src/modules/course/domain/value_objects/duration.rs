use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::course::domain::errors::DomainError;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Largest representable length; matches the signed 32-bit storage column
pub const MAX_MINUTES: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    fn minutes_per_unit(self) -> f64 {
        match self {
            DurationUnit::Minutes => 1.0,
            DurationUnit::Hours => MINUTES_PER_HOUR as f64,
            DurationUnit::Days => MINUTES_PER_DAY as f64,
        }
    }
}

impl FromStr for DurationUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minutes" | "minute" => Ok(DurationUnit::Minutes),
            "hours" | "hour" => Ok(DurationUnit::Hours),
            "days" | "day" => Ok(DurationUnit::Days),
            _ => Err(DomainError::InvalidUnit(s.to_string())),
        }
    }
}

/// Course length, stored as whole minutes.
///
/// Rounding to the nearest minute happens once, at construction, so reading
/// `hours()` back from a converted value is not guaranteed to round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Duration {
    minutes: u32,
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let minutes = f64::deserialize(deserializer)?;
        Duration::new(minutes, DurationUnit::Minutes).map_err(serde::de::Error::custom)
    }
}

impl Duration {
    pub fn new(value: f64, unit: DurationUnit) -> Result<Self, DomainError> {
        if value.is_nan() || value < 0.0 {
            return Err(DomainError::NegativeDuration(value));
        }

        let minutes = (value * unit.minutes_per_unit()).round();
        if minutes > MAX_MINUTES as f64 {
            return Err(DomainError::DurationOutOfRange(minutes));
        }

        Ok(Self {
            minutes: minutes as u32,
        })
    }

    /// Build from a unit name such as `"hours"`
    pub fn parse(value: f64, unit: &str) -> Result<Self, DomainError> {
        Self::new(value, unit.parse()?)
    }

    /// Values above `MAX_MINUTES` are clamped to it
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes: minutes.min(MAX_MINUTES),
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn hours(&self) -> f64 {
        self.minutes as f64 / MINUTES_PER_HOUR as f64
    }

    pub fn days(&self) -> f64 {
        self.minutes as f64 / MINUTES_PER_DAY as f64
    }

    pub fn add(&self, other: &Duration) -> Duration {
        Duration {
            minutes: self.minutes.saturating_add(other.minutes).min(MAX_MINUTES),
        }
    }

    pub fn format_human_readable(&self) -> String {
        if self.minutes < MINUTES_PER_HOUR {
            return format!("{} minutes", self.minutes);
        }

        let hours = self.minutes / MINUTES_PER_HOUR;
        let rest = self.minutes % MINUTES_PER_HOUR;
        match (hours, rest) {
            (1, 0) => "1 hour".to_string(),
            (h, 0) => format!("{} hours", h),
            (h, m) => format!("{}h{}m", h, m),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_human_readable())
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::default(), |acc, d| acc.add(&d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Duration::new(2.0, DurationUnit::Hours).unwrap().minutes(), 120);
        assert_eq!(Duration::new(1.0, DurationUnit::Days).unwrap().minutes(), 1440);
        assert_eq!(Duration::new(45.0, DurationUnit::default()).unwrap().minutes(), 45);
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        assert_eq!(Duration::new(10.4, DurationUnit::Minutes).unwrap().minutes(), 10);
        assert_eq!(Duration::new(10.5, DurationUnit::Minutes).unwrap().minutes(), 11);
        // 0.333h = 19.98 minutes, which reads back as 0.333.. hours
        let d = Duration::new(0.333, DurationUnit::Hours).unwrap();
        assert_eq!(d.minutes(), 20);
        assert!((d.hours() - 0.333).abs() > 1e-6);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            Duration::new(-1.0, DurationUnit::Minutes),
            Err(DomainError::NegativeDuration(_))
        ));
    }

    #[test]
    fn test_capped_at_storage_range() {
        assert!(matches!(
            Duration::new(MAX_MINUTES as f64 + 1.0, DurationUnit::Minutes),
            Err(DomainError::DurationOutOfRange(_))
        ));
        assert!(Duration::new(MAX_MINUTES as f64, DurationUnit::Minutes).is_ok());
        assert_eq!(Duration::from_minutes(u32::MAX).minutes(), MAX_MINUTES);

        let big = Duration::from_minutes(MAX_MINUTES);
        assert_eq!(big.add(&Duration::from_minutes(10)).minutes(), MAX_MINUTES);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        assert!(matches!(
            Duration::parse(3.0, "weeks"),
            Err(DomainError::InvalidUnit(_))
        ));
        assert_eq!(Duration::parse(3.0, "Hours").unwrap().minutes(), 180);
    }

    #[test]
    fn test_derived_views() {
        let d = Duration::from_minutes(90);
        assert_eq!(d.hours(), 1.5);
        assert_eq!(Duration::from_minutes(2880).days(), 2.0);
    }

    #[test]
    fn test_add() {
        let total = Duration::from_minutes(90).add(&Duration::from_minutes(45));
        assert_eq!(total.minutes(), 135);
        let summed: Duration = vec![Duration::from_minutes(30), Duration::from_minutes(30)]
            .into_iter()
            .sum();
        assert_eq!(summed.minutes(), 60);
    }

    #[test]
    fn test_format_human_readable() {
        assert_eq!(Duration::from_minutes(45).format_human_readable(), "45 minutes");
        assert_eq!(Duration::from_minutes(60).format_human_readable(), "1 hour");
        assert_eq!(Duration::from_minutes(90).format_human_readable(), "1h30m");
        assert_eq!(Duration::from_minutes(120).format_human_readable(), "2 hours");
        assert_eq!(Duration::from_minutes(125).format_human_readable(), "2h5m");
    }
}
