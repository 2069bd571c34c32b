use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::directory::{AthleteDirectory, GoalDirectory};
use crate::domain::YearWindow;
use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationConfig};

/// Default `max-rows` of a hosted PostgREST endpoint. Larger pages come back short.
pub const POSTGREST_MAX_ROWS: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChallengeSettings {
    pub year: i32,
    pub team_goal_km: f64,
    pub page_size: usize,
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            year: 2026,
            team_goal_km: 6500.0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ChallengeSettings {
    pub fn window(&self) -> YearWindow {
        YearWindow::new(self.year)
    }

    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig::new().with_page_size(self.page_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgrest,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    /// Project URL; `/rest/v1/<table>` is appended
    pub url: String,
    pub table: String,
    /// Unique column used to keep page order stable between requests.
    /// An empty string sends no ordering.
    pub order_column: Option<String>,
    pub api_key: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub database_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Postgrest,
            url: "http://localhost:54321".to_string(),
            table: "Zapier".to_string(),
            order_column: Some("id".to_string()),
            api_key: None,
            user_agent: "ChallengeDashboard/1.0".to_string(),
            timeout_secs: 30,
            database_path: "challenge_dashboard.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub challenge: ChallengeSettings,
    pub store: StoreSettings,
    pub athletes: AthleteDirectory,
    pub goals: GoalDirectory,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file, falling back to defaults when it is absent.
    /// Environment variables override store connection settings either way.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config = Self::from_toml(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            info!("Loaded configuration from {}", path.display());
            config
        } else {
            warn!("Config file {} not found, using defaults", path.display());
            Self::new()
        };

        config.apply_env_overrides();
        if config.athletes.is_empty() {
            warn!("No athletes configured, leaderboards will show placeholder names");
        }
        Ok(config)
    }

    /// Page size for the configured store, capped at the PostgREST row limit for that backend
    pub fn pagination(&self) -> PaginationConfig {
        let pagination = self.challenge.pagination();

        if self.store.backend == StoreBackend::Postgrest && pagination.page_size > POSTGREST_MAX_ROWS {
            warn!(
                "page_size {} exceeds the PostgREST row limit, using {}",
                pagination.page_size, POSTGREST_MAX_ROWS
            );
            return pagination.with_page_size(POSTGREST_MAX_ROWS);
        }

        pagination
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STORE_URL") {
            self.store.url = url;
        }
        if let Ok(key) = std::env::var("STORE_API_KEY") {
            self.store.api_key = Some(key);
        }
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            self.store.database_path = path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [challenge]
        year = 2027
        team_goal_km = 7000

        [store]
        backend = "sqlite"
        database_path = "season.db"

        [[athletes]]
        id = 20749962
        name = "Torbjørn"

        [[athletes]]
        id = 23372809
        name = "Henrik"

        [goals]
        "Torbjørn" = 800
        "Henrik" = 700.5
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml(SAMPLE).unwrap();

        assert_eq!(config.challenge.year, 2027);
        assert_eq!(config.challenge.team_goal_km, 7000.0);
        assert_eq!(config.challenge.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.database_path, "season.db");
        assert_eq!(config.store.table, "Zapier");
        assert_eq!(config.athletes.name_for(23372809), "Henrik");
        assert_eq!(config.goals.goal_for("Henrik"), 700.5);
        assert_eq!(config.goals.total(), 1500.5);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config.challenge.year, 2026);
        assert_eq!(config.challenge.team_goal_km, 6500.0);
        assert_eq!(config.store.backend, StoreBackend::Postgrest);
        assert!(config.athletes.is_empty());
        assert_eq!(config.goals.total(), 0.0);
    }

    #[test]
    fn test_rejects_unknown_backend() {
        assert!(AppConfig::from_toml("[store]\nbackend = \"mongo\"").is_err());
    }

    #[test]
    fn test_postgrest_page_size_is_capped_at_row_limit() {
        let config = AppConfig::from_toml("[challenge]\npage_size = 5000").unwrap();
        assert_eq!(config.pagination().page_size, POSTGREST_MAX_ROWS);

        let config = AppConfig::from_toml("[challenge]\npage_size = 250").unwrap();
        assert_eq!(config.pagination().page_size, 250);
    }

    #[test]
    fn test_sqlite_page_size_is_not_capped() {
        let config =
            AppConfig::from_toml("[challenge]\npage_size = 5000\n[store]\nbackend = \"sqlite\"").unwrap();
        assert_eq!(config.pagination().page_size, 5000);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let config = AppConfig::from_toml("[challenge]\npage_size = 0").unwrap();
        assert_eq!(config.challenge.pagination().page_size, 1);
    }
}
