use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use super::parsing::{parse_count, parse_metric, parse_start_date};

pub type AthleteId = i64;

/// Single activity as delivered by the backing store, numeric fields already coerced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub athlete_id: AthleteId,
    pub activity_type: String,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub moving_time_seconds: i64,
    pub start_date: String,
}

impl ActivityRecord {
    pub fn started_at(&self) -> Option<NaiveDateTime> {
        parse_start_date(&self.start_date)
    }

    pub fn value_of(&self, field: ValueField) -> f64 {
        match field {
            ValueField::Distance => self.distance_km,
            ValueField::Elevation => self.elevation_gain_m,
            ValueField::Count => 1.0,
        }
    }
}

/// Row shape of the activity table. Numeric columns arrive as text, numbers or null
/// depending on how the row was written, so they stay untyped until `into_record`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivityRow {
    pub athlete_id: i64,
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub distance_in_k: Value,
    #[serde(default)]
    pub total_elevation_gain: Value,
    #[serde(default)]
    pub moving_time: Value,
    #[serde(default)]
    pub start_date: Option<String>,
}

impl RawActivityRow {
    pub fn into_record(self) -> ActivityRecord {
        ActivityRecord {
            athlete_id: self.athlete_id,
            activity_type: self.activity_type,
            distance_km: parse_metric(&self.distance_in_k),
            elevation_gain_m: parse_metric(&self.total_elevation_gain),
            moving_time_seconds: parse_count(&self.moving_time),
            start_date: self.start_date.unwrap_or_default(),
        }
    }
}

/// Query descriptor understood by every activity store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub types: BTreeSet<String>,
    pub min_moving_time: Option<i64>,
    pub start_date: Option<NaiveDate>,
    /// Exclusive upper bound
    pub end_date: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_moving_time(mut self, seconds: i64) -> Self {
        self.min_moving_time = Some(seconds);
        self
    }

    pub fn within(mut self, window: YearWindow) -> Self {
        self.start_date = Some(window.start());
        self.end_date = Some(window.end());
        self
    }

    /// In-memory evaluation of the same predicate the stores translate into queries
    pub fn matches(&self, record: &ActivityRecord) -> bool {
        self.matches_type(record) && self.matches_moving_time(record) && self.matches_dates(record)
    }

    fn matches_type(&self, record: &ActivityRecord) -> bool {
        self.types.is_empty() || self.types.contains(&record.activity_type)
    }

    fn matches_moving_time(&self, record: &ActivityRecord) -> bool {
        self.min_moving_time
            .map_or(true, |min| record.moving_time_seconds >= min)
    }

    fn matches_dates(&self, record: &ActivityRecord) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        let Some(started) = record.started_at() else {
            return false;
        };
        let day = started.date();

        self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day < end)
    }
}

/// Competition season, always a full calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    year: i32,
}

impl YearWindow {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year + 1, 1, 1).unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, moment: &NaiveDateTime) -> bool {
        moment.year() == self.year
    }
}

/// Which quantity a leaderboard accumulates per athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueField {
    Distance,
    Elevation,
    Count,
}

impl ValueField {
    /// Rounding applied to the per-athlete sum before ranking
    pub fn round(&self, total: f64) -> f64 {
        match self {
            ValueField::Distance => round_to_hundredths(total),
            ValueField::Elevation => total.round(),
            ValueField::Count => total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub value: f64,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    Achieved, // >= 100%
    High,     // >= 75%
    Medium,   // >= 50%
    Low,
}

impl ProgressTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            ProgressTier::Achieved
        } else if percentage >= 75.0 {
            ProgressTier::High
        } else if percentage >= 50.0 {
            ProgressTier::Medium
        } else {
            ProgressTier::Low
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProgressTier::Achieved => "achieved",
            ProgressTier::High => "high",
            ProgressTier::Medium => "medium",
            ProgressTier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnnotatedEntry {
    pub name: String,
    pub value: f64,
    pub goal: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub progress_tier: ProgressTier,
}

/// One month of the cumulative progress chart, serialized as `{month, actual, target}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    #[serde(rename = "month")]
    pub month_label: String,
    #[serde(rename = "actual")]
    pub cumulative_actual: f64,
    #[serde(rename = "target")]
    pub cumulative_target: f64,
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(activity_type: &str, moving_time: i64, start_date: &str) -> ActivityRecord {
        ActivityRecord {
            athlete_id: 1,
            activity_type: activity_type.to_string(),
            distance_km: 1.0,
            elevation_gain_m: 0.0,
            moving_time_seconds: moving_time,
            start_date: start_date.to_string(),
        }
    }

    #[test]
    fn test_raw_row_coerces_text_and_garbage() {
        let row: RawActivityRow = serde_json::from_value(json!({
            "athlete_id": 7,
            "type": "Run",
            "distance_in_k": "12.5",
            "total_elevation_gain": "n/a",
            "moving_time": 3600,
            "start_date": "2026-02-01T07:00:00Z"
        }))
        .unwrap();

        let record = row.into_record();
        assert_eq!(record.distance_km, 12.5);
        assert_eq!(record.elevation_gain_m, 0.0);
        assert_eq!(record.moving_time_seconds, 3600);
    }

    #[test]
    fn test_raw_row_missing_numeric_columns_default_to_zero() {
        let row: RawActivityRow = serde_json::from_value(json!({
            "athlete_id": 7,
            "type": "Walk"
        }))
        .unwrap();

        let record = row.into_record();
        assert_eq!(record.distance_km, 0.0);
        assert_eq!(record.moving_time_seconds, 0);
        assert_eq!(record.start_date, "");
    }

    #[test]
    fn test_filter_window_is_half_open() {
        let filter = FilterSpec::new().within(YearWindow::new(2026));

        assert!(filter.matches(&record("Run", 0, "2026-01-01T00:00:00Z")));
        assert!(filter.matches(&record("Run", 0, "2026-12-31T23:59:59Z")));
        assert!(!filter.matches(&record("Run", 0, "2027-01-01T00:00:00Z")));
        assert!(!filter.matches(&record("Run", 0, "2025-12-31T23:59:59Z")));
    }

    #[test]
    fn test_filter_types_and_moving_time() {
        let filter = FilterSpec::new()
            .with_types(["WeightTraining", "Workout"])
            .with_min_moving_time(1800);

        assert!(filter.matches(&record("Workout", 1800, "2026-03-01T10:00:00Z")));
        assert!(!filter.matches(&record("Workout", 1799, "2026-03-01T10:00:00Z")));
        assert!(!filter.matches(&record("Run", 4000, "2026-03-01T10:00:00Z")));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(FilterSpec::new().matches(&record("Anything", 0, "")));
    }

    #[test]
    fn test_progress_tier_thresholds() {
        assert_eq!(ProgressTier::from_percentage(100.0), ProgressTier::Achieved);
        assert_eq!(ProgressTier::from_percentage(75.0), ProgressTier::High);
        assert_eq!(ProgressTier::from_percentage(74.99), ProgressTier::Medium);
        assert_eq!(ProgressTier::from_percentage(50.0), ProgressTier::Medium);
        assert_eq!(ProgressTier::from_percentage(49.9), ProgressTier::Low);
    }

    #[test]
    fn test_value_field_rounding() {
        assert_eq!(ValueField::Distance.round(15.456), 15.46);
        assert_eq!(ValueField::Elevation.round(1234.5), 1235.0);
        assert_eq!(ValueField::Count.round(3.0), 3.0);
    }
}
