pub mod models;
pub mod parsing;
pub mod progress;

pub use models::*;
pub use progress::GoalProgress;
