use super::error::AppError;
use crate::config::Config;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::Deserialize;

/// Length of the charging session to optimise for, in whole hours (1 to 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChargeDuration(u8);

impl ChargeDuration {
    pub const MIN: Self = Self(Config::MIN_CHARGE_HOURS);
    pub const MAX: Self = Self(Config::MAX_CHARGE_HOURS);

    pub fn new(hours: u8) -> Result<Self, AppError> {
        if (Config::MIN_CHARGE_HOURS..=Config::MAX_CHARGE_HOURS).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(AppError::ConfigError(format!(
                "Charging duration must be between {} and {} hours, got {hours}",
                Config::MIN_CHARGE_HOURS,
                Config::MAX_CHARGE_HOURS
            )))
        }
    }

    pub const fn hours(self) -> u8 {
        self.0
    }

    /// Every selectable duration, shortest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Config::MIN_CHARGE_HOURS..=Config::MAX_CHARGE_HOURS).map(Self)
    }
}

impl Default for ChargeDuration {
    fn default() -> Self {
        Self(Config::DEFAULT_CHARGE_HOURS)
    }
}

impl std::fmt::Display for ChargeDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} HR", self.0)
    }
}

impl std::str::FromStr for ChargeDuration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours = s
            .trim()
            .parse::<u8>()
            .map_err(|e| AppError::ConfigError(format!("Invalid duration '{s}': {e}")))?;
        Self::new(hours)
    }
}

/// Best contiguous charging window returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimalWindow {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub end: DateTime<Utc>,
    /// Average clean energy share across the window (0-100)
    pub average: f64,
}

impl OptimalWindow {
    pub fn start_label(&self) -> String {
        format_window_time(self.start)
    }

    pub fn end_label(&self) -> String {
        format_window_time(self.end)
    }

    pub fn average_label(&self) -> String {
        format!("{:.0}%", self.average.round())
    }
}

/// Formats a window boundary in the viewer's local time, e.g. `Jan 1, 12:00`
fn format_window_time(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%b %-d, %H:%M")
        .to_string()
}

/// Accepts RFC 3339 timestamps as well as naive ones (with or without seconds),
/// which are taken to be UTC.
fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(&s);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| dt.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_duration_bounds() {
        assert!(ChargeDuration::new(0).is_err());
        assert_eq!(ChargeDuration::new(1).unwrap(), ChargeDuration::MIN);
        assert_eq!(ChargeDuration::new(6).unwrap(), ChargeDuration::MAX);
        assert!(ChargeDuration::new(7).is_err());
    }

    #[test]
    fn test_duration_default_and_display() {
        let duration = ChargeDuration::default();
        assert_eq!(duration.hours(), 3);
        assert_eq!(duration.to_string(), "3 HR");
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!("4".parse::<ChargeDuration>().unwrap().hours(), 4);
        assert!("".parse::<ChargeDuration>().is_err());
        assert!("9".parse::<ChargeDuration>().is_err());
    }

    #[test]
    fn test_all_durations() {
        let hours: Vec<u8> = ChargeDuration::all().map(ChargeDuration::hours).collect();
        assert_eq!(hours, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_parsing_rfc3339() {
        let json = r#"{
            "start": "2025-01-01T12:00:00Z",
            "end": "2025-01-01T15:00:00Z",
            "average": 85
        }"#;

        let window: OptimalWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.start, utc(2025, 1, 1, 12, 0));
        assert_eq!(window.end, utc(2025, 1, 1, 15, 0));
        assert_eq!(window.average, 85.0);
        assert_eq!(window.average_label(), "85%");
    }

    #[test]
    fn test_window_parsing_naive_timestamps() {
        let json = r#"{
            "start": "2025-01-01T12:30:00.000",
            "end": "2025-01-01T15:30",
            "average": 71.4
        }"#;

        let window: OptimalWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.start, utc(2025, 1, 1, 12, 30));
        assert_eq!(window.end, utc(2025, 1, 1, 15, 30));
    }

    #[test]
    fn test_window_with_offset_is_normalised() {
        let json = r#"{
            "start": "2025-06-01T13:00:00+01:00",
            "end": "2025-06-01T14:00:00+01:00",
            "average": 50
        }"#;

        let window: OptimalWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.start, utc(2025, 6, 1, 12, 0));
    }

    #[test]
    fn test_window_rejects_garbage_timestamp() {
        let json = r#"{"start": "noon", "end": "2025-01-01T15:00:00Z", "average": 1}"#;
        assert!(serde_json::from_str::<OptimalWindow>(json).is_err());
    }
}
