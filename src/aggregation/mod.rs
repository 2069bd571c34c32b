pub mod boards;
pub mod engine;
pub mod leaderboard;
pub mod monthly;
pub mod shirts;
pub mod totals;

pub use boards::{Board, LeaderboardQuery};
pub use engine::{Aggregator, Dashboard};
pub use shirts::{ShirtHolder, Shirts, leader, runner_up};
pub use totals::TeamProgress;
