use chrono::{Datelike, NaiveDate};

use crate::domain::{ActivityRecord, MonthlyPoint, YearWindow, round_to_hundredths};

const MONTHS: usize = 12;

/// Cumulative distance per calendar month of the competition year, paired with a
/// linearly pro-rated target. Always twelve points, January first.
pub fn build_monthly_series(
    records: &[ActivityRecord],
    window: YearWindow,
    yearly_goal_km: f64,
) -> Vec<MonthlyPoint> {
    let per_month = bucket_by_month(records, window);
    let target_per_month = yearly_goal_km / MONTHS as f64;

    let mut cumulative = 0.0;
    per_month
        .iter()
        .enumerate()
        .map(|(idx, distance)| {
            let month = idx + 1;
            cumulative += distance;
            MonthlyPoint {
                month_label: month_label(window.year(), month as u32),
                cumulative_actual: round_to_hundredths(cumulative),
                cumulative_target: round_to_hundredths(target_per_month * month as f64),
            }
        })
        .collect()
}

fn bucket_by_month(records: &[ActivityRecord], window: YearWindow) -> [f64; MONTHS] {
    let mut buckets = [0.0; MONTHS];

    for record in records {
        let Some(started) = record.started_at() else {
            continue;
        };
        if window.contains(&started) {
            buckets[started.month0() as usize] += record.distance_km;
        }
    }

    buckets
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(start_date: &str, distance_km: f64) -> ActivityRecord {
        ActivityRecord {
            athlete_id: 1,
            activity_type: "Run".to_string(),
            distance_km,
            elevation_gain_m: 0.0,
            moving_time_seconds: 0,
            start_date: start_date.to_string(),
        }
    }

    #[test]
    fn test_empty_input_gives_twelve_zero_points() {
        let series = build_monthly_series(&[], YearWindow::new(2026), 0.0);

        assert_eq!(series.len(), 12);
        assert!(series.iter().all(|p| p.cumulative_actual == 0.0));
        assert!(series.iter().all(|p| p.cumulative_target == 0.0));
        assert_eq!(series[0].month_label, "Jan");
        assert_eq!(series[11].month_label, "Dec");
    }

    #[test]
    fn test_running_totals_carry_over_empty_months() {
        let records = vec![
            run_on("2026-01-15T08:00:00Z", 10.0),
            run_on("2026-01-20T08:00:00Z", 2.5),
            run_on("2026-03-02T08:00:00Z", 7.0),
        ];

        let series = build_monthly_series(&records, YearWindow::new(2026), 1200.0);
        let actual: Vec<f64> = series.iter().map(|p| p.cumulative_actual).collect();

        assert_eq!(actual[0], 12.5);
        assert_eq!(actual[1], 12.5);
        assert_eq!(actual[2], 19.5);
        assert_eq!(actual[11], 19.5);
        assert!(actual.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_target_is_pro_rated() {
        let series = build_monthly_series(&[], YearWindow::new(2026), 1200.0);

        assert_eq!(series[0].cumulative_target, 100.0);
        assert_eq!(series[5].cumulative_target, 600.0);
        assert_eq!(series[11].cumulative_target, 1200.0);
    }

    #[test]
    fn test_target_rounding_for_uneven_goal() {
        let series = build_monthly_series(&[], YearWindow::new(2026), 6500.0);
        assert_eq!(series[0].cumulative_target, 541.67);
        assert_eq!(series[11].cumulative_target, 6500.0);
    }

    #[test]
    fn test_records_outside_year_or_undated_are_ignored() {
        let records = vec![
            run_on("2025-12-31T23:00:00Z", 50.0),
            run_on("not a date", 50.0),
            run_on("2026-06-01T08:00:00Z", 5.0),
        ];

        let series = build_monthly_series(&records, YearWindow::new(2026), 0.0);
        assert_eq!(series[11].cumulative_actual, 5.0);
        assert_eq!(series[4].cumulative_actual, 0.0);
    }
}
