use clap::ValueEnum;
use std::str::FromStr;

use crate::domain::ValueField;

pub const WALK_RUN_HIKE_TYPES: [&str; 3] = ["Run", "Walk", "Hike"];
// Per-athlete boards leave out Hike, team totals keep it.
pub const WALK_RUN_TYPES: [&str; 2] = ["Run", "Walk"];
pub const BIKE_TYPES: [&str; 3] = ["Ride", "VirtualRide", "EBikeRide"];
pub const SKIING_TYPES: [&str; 3] = ["NordicSki", "AlpineSki", "BackcountrySki"];
pub const STRENGTH_TYPES: [&str; 3] = ["WeightTraining", "Workout", "Crossfit"];

pub const STRENGTH_MIN_MOVING_TIME_SECS: i64 = 30 * 60;

/// What a leaderboard accumulates and over which activities
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardQuery {
    pub types: Vec<String>,
    pub value_field: ValueField,
    pub min_moving_time: Option<i64>,
}

impl LeaderboardQuery {
    pub fn new<S: AsRef<str>>(types: &[S], value_field: ValueField) -> Self {
        Self {
            types: types.iter().map(|t| t.as_ref().to_string()).collect(),
            value_field,
            min_moving_time: None,
        }
    }

    pub fn with_min_moving_time(mut self, seconds: i64) -> Self {
        self.min_moving_time = Some(seconds);
        self
    }
}

/// Leaderboards shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Board {
    WalkRun,
    Elevation,
    Bike,
    Skiing,
    Strength,
}

impl Board {
    pub const ALL: [Board; 5] = [
        Board::WalkRun,
        Board::Elevation,
        Board::Bike,
        Board::Skiing,
        Board::Strength,
    ];

    pub fn query(&self) -> LeaderboardQuery {
        match self {
            Board::WalkRun => LeaderboardQuery::new(&WALK_RUN_TYPES, ValueField::Distance),
            Board::Elevation => LeaderboardQuery::new(&WALK_RUN_TYPES, ValueField::Elevation),
            Board::Bike => LeaderboardQuery::new(&BIKE_TYPES, ValueField::Distance),
            Board::Skiing => LeaderboardQuery::new(&SKIING_TYPES, ValueField::Distance),
            Board::Strength => LeaderboardQuery::new(&STRENGTH_TYPES, ValueField::Count)
                .with_min_moving_time(STRENGTH_MIN_MOVING_TIME_SECS),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Board::WalkRun => "walk-run",
            Board::Elevation => "elevation",
            Board::Bike => "bike",
            Board::Skiing => "skiing",
            Board::Strength => "strength",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Board::WalkRun => "Walk/Run",
            Board::Elevation => "Elevation",
            Board::Bike => "Bike",
            Board::Skiing => "Skiing",
            Board::Strength => "Strength sessions",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self.query().value_field {
            ValueField::Distance => "km",
            ValueField::Elevation => "m",
            ValueField::Count => "sessions",
        }
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::ALL
            .into_iter()
            .find(|board| board.slug() == s)
            .ok_or_else(|| format!("Unknown leaderboard: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for board in Board::ALL {
            assert_eq!(board.slug().parse::<Board>(), Ok(board));
        }
        assert!("running".parse::<Board>().is_err());
    }

    #[test]
    fn test_slugs_match_cli_names() {
        for board in Board::ALL {
            let value = board.to_possible_value().unwrap();
            assert_eq!(value.get_name(), board.slug());
        }
    }

    #[test]
    fn test_strength_query() {
        let query = Board::Strength.query();
        assert_eq!(query.value_field, ValueField::Count);
        assert_eq!(query.min_moving_time, Some(1800));
        assert_eq!(query.types, vec!["WeightTraining", "Workout", "Crossfit"]);
    }

    #[test]
    fn test_walk_run_board_excludes_hike() {
        assert!(!Board::WalkRun.query().types.contains(&"Hike".to_string()));
        assert!(!Board::Elevation.query().types.contains(&"Hike".to_string()));
    }
}
