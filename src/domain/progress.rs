use serde::Serialize;

use super::models::ProgressTier;

/// Progress of an accumulated value towards a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub percentage: f64,
    pub remaining: f64,
    pub tier: ProgressTier,
}

impl GoalProgress {
    /// Percentage is capped at 100 and defined as 0 when there is no positive goal.
    pub fn derive(value: f64, goal: f64) -> Self {
        let percentage = percentage_of(value, goal);

        Self {
            percentage,
            remaining: (goal - value).max(0.0),
            tier: ProgressTier::from_percentage(percentage),
        }
    }
}

fn percentage_of(value: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        (value / goal * 100.0).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_progress() {
        let progress = GoalProgress::derive(80.0, 100.0);
        assert_eq!(progress.percentage, 80.0);
        assert_eq!(progress.remaining, 20.0);
        assert_eq!(progress.tier, ProgressTier::High);
    }

    #[test]
    fn test_over_achievement_is_capped() {
        let progress = GoalProgress::derive(150.0, 100.0);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert_eq!(progress.tier, ProgressTier::Achieved);
    }

    #[test]
    fn test_missing_goal() {
        let progress = GoalProgress::derive(42.0, 0.0);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, 0.0);
        assert_eq!(progress.tier, ProgressTier::Low);
    }

    #[test]
    fn test_medium_and_low_tiers() {
        assert_eq!(GoalProgress::derive(300.0, 600.0).tier, ProgressTier::Medium);
        assert_eq!(GoalProgress::derive(10.0, 600.0).tier, ProgressTier::Low);
        assert_eq!(GoalProgress::derive(10.0, 600.0).remaining, 590.0);
    }
}
