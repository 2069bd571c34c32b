use serde::Serialize;

use crate::domain::LeaderboardEntry;

pub fn leader(board: &[LeaderboardEntry]) -> Option<&LeaderboardEntry> {
    board.first()
}

/// Second place, if the board has one. A single-entry board has no runner-up.
pub fn runner_up(board: &[LeaderboardEntry]) -> Option<&LeaderboardEntry> {
    board.get(1)
}

/// Current holder of a leadership shirt and the closest challenger
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShirtHolder {
    pub leader: LeaderboardEntry,
    pub runner_up: Option<LeaderboardEntry>,
    /// How far the runner-up trails, as a percentage of the leader's value
    pub gap_percent: Option<f64>,
}

impl ShirtHolder {
    pub fn from_board(board: &[LeaderboardEntry]) -> Option<Self> {
        let leader = leader(board)?.clone();
        let runner_up = runner_up(board).cloned();
        let gap_percent = runner_up
            .as_ref()
            .and_then(|second| gap_behind(&leader, second));

        Some(Self {
            leader,
            runner_up,
            gap_percent,
        })
    }
}

fn gap_behind(leader: &LeaderboardEntry, second: &LeaderboardEntry) -> Option<f64> {
    if leader.value > 0.0 {
        Some((leader.value - second.value) / leader.value * 100.0)
    } else {
        None
    }
}

/// Distance (yellow) and elevation (polka dot) shirts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shirts {
    pub distance: Option<ShirtHolder>,
    pub elevation: Option<ShirtHolder>,
}
