use serde::Serialize;

use crate::domain::{ActivityRecord, GoalProgress};

/// Raw sum of distance; callers round for display
pub fn sum_distance(records: &[ActivityRecord]) -> f64 {
    records.iter().map(|r| r.distance_km).sum()
}

/// Challenge-wide distance against the team goal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProgress {
    pub total_km: f64,
    pub goal_km: f64,
    pub percentage: f64,
    pub remaining: f64,
}

impl TeamProgress {
    pub fn new(total_km: f64, goal_km: f64) -> Self {
        let progress = GoalProgress::derive(total_km, goal_km);
        Self {
            total_km,
            goal_km,
            percentage: progress.percentage,
            remaining: progress.remaining,
        }
    }
}
