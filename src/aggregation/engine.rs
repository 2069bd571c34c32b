use log::info;
use serde::Serialize;

use super::boards::{Board, LeaderboardQuery, WALK_RUN_HIKE_TYPES};
use super::leaderboard::{annotate_with_goals, rank_athletes};
use super::monthly::build_monthly_series;
use super::shirts::{ShirtHolder, Shirts};
use super::totals::{TeamProgress, sum_distance};
use crate::config::settings::ChallengeSettings;
use crate::config::{AppConfig, AthleteDirectory, GoalDirectory};
use crate::domain::{
    ActivityRecord, FilterSpec, GoalAnnotatedEntry, LeaderboardEntry, MonthlyPoint, YearWindow,
};
use crate::errors::DataSourceResult;
use crate::pagination::{PaginationConfig, fetch_all_activities};
use crate::store::ActivityStore;

/// Every view of the dashboard, computed in one go
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub team: TeamProgress,
    pub monthly: Vec<MonthlyPoint>,
    pub shirts: Shirts,
    pub goals: Vec<GoalAnnotatedEntry>,
    pub walk_run: Vec<LeaderboardEntry>,
    pub elevation: Vec<LeaderboardEntry>,
    pub bike: Vec<LeaderboardEntry>,
    pub skiing: Vec<LeaderboardEntry>,
    pub strength: Vec<LeaderboardEntry>,
}

/// Derives dashboard views from a store. Each call fetches afresh and keeps no state
/// between calls, so concurrent calls are independent.
pub struct Aggregator<S> {
    store: S,
    athletes: AthleteDirectory,
    goals: GoalDirectory,
    window: YearWindow,
    team_goal_km: f64,
    pagination: PaginationConfig,
}

impl<S: ActivityStore> Aggregator<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        let mut aggregator = Self::from_parts(
            store,
            config.athletes.clone(),
            config.goals.clone(),
            &config.challenge,
        );
        aggregator.pagination = config.pagination();
        aggregator
    }

    pub fn from_parts(
        store: S,
        athletes: AthleteDirectory,
        goals: GoalDirectory,
        challenge: &ChallengeSettings,
    ) -> Self {
        Self {
            store,
            athletes,
            goals,
            window: challenge.window(),
            team_goal_km: challenge.team_goal_km,
            pagination: challenge.pagination(),
        }
    }

    pub fn window(&self) -> YearWindow {
        self.window
    }

    pub fn team_goal_km(&self) -> f64 {
        self.team_goal_km
    }

    /// Raw walk/run/hike distance for the competition year
    pub async fn total_distance(&self) -> DataSourceResult<f64> {
        let records = self.fetch(self.season_filter(&WALK_RUN_HIKE_TYPES)).await?;
        Ok(sum_distance(&records))
    }

    pub async fn team_progress(&self) -> DataSourceResult<TeamProgress> {
        let total = self.total_distance().await?;
        Ok(TeamProgress::new(total, self.team_goal_km))
    }

    /// Cumulative walk/run/hike distance per month against `yearly_goal_km`
    pub async fn monthly_series(&self, yearly_goal_km: f64) -> DataSourceResult<Vec<MonthlyPoint>> {
        let records = self.fetch(self.season_filter(&WALK_RUN_HIKE_TYPES)).await?;
        Ok(build_monthly_series(&records, self.window, yearly_goal_km))
    }

    pub async fn leaderboard(&self, query: &LeaderboardQuery) -> DataSourceResult<Vec<LeaderboardEntry>> {
        let mut filter = self.season_filter(&query.types);
        if let Some(min) = query.min_moving_time {
            filter = filter.with_min_moving_time(min);
        }

        let records = self.fetch(filter).await?;
        Ok(rank_athletes(&records, query.value_field, &self.athletes))
    }

    pub async fn board(&self, board: Board) -> DataSourceResult<Vec<LeaderboardEntry>> {
        self.leaderboard(&board.query()).await
    }

    /// Sessions of at least thirty minutes per athlete
    pub async fn strength_session_count(&self) -> DataSourceResult<Vec<LeaderboardEntry>> {
        self.board(Board::Strength).await
    }

    /// Walk/run distance board (no hiking) with each athlete's yearly goal attached
    pub async fn goal_annotated_walk_run_leaderboard(
        &self,
    ) -> DataSourceResult<Vec<GoalAnnotatedEntry>> {
        let board = self.board(Board::WalkRun).await?;
        Ok(annotate_with_goals(board, &self.goals))
    }

    pub async fn shirts(&self) -> DataSourceResult<Shirts> {
        let (distance, elevation) =
            tokio::try_join!(self.board(Board::WalkRun), self.board(Board::Elevation))?;

        Ok(Shirts {
            distance: ShirtHolder::from_board(&distance),
            elevation: ShirtHolder::from_board(&elevation),
        })
    }

    pub async fn dashboard(&self) -> DataSourceResult<Dashboard> {
        let (team, monthly, goals, walk_run, elevation, bike, skiing, strength) = tokio::try_join!(
            self.team_progress(),
            self.monthly_series(self.team_goal_km),
            self.goal_annotated_walk_run_leaderboard(),
            self.board(Board::WalkRun),
            self.board(Board::Elevation),
            self.board(Board::Bike),
            self.board(Board::Skiing),
            self.board(Board::Strength),
        )?;

        info!(
            "Dashboard for {}: {:.1} km of {:.0} km, {} athletes on the walk/run board",
            self.window.year(),
            team.total_km,
            team.goal_km,
            walk_run.len()
        );

        Ok(Dashboard {
            team,
            monthly,
            shirts: Shirts {
                distance: ShirtHolder::from_board(&walk_run),
                elevation: ShirtHolder::from_board(&elevation),
            },
            goals,
            walk_run,
            elevation,
            bike,
            skiing,
            strength,
        })
    }

    fn season_filter<T: AsRef<str>>(&self, types: &[T]) -> FilterSpec {
        FilterSpec::new()
            .with_types(types.iter().map(|t| t.as_ref().to_string()))
            .within(self.window)
    }

    async fn fetch(&self, filter: FilterSpec) -> DataSourceResult<Vec<ActivityRecord>> {
        fetch_all_activities(&self.store, &filter, &self.pagination).await
    }
}
