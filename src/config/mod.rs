pub mod directory;
pub mod settings;

pub use directory::{AthleteDirectory, GoalDirectory};
pub use settings::AppConfig;
