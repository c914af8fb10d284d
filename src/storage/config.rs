//! Dashboard configuration.
//!
//! Settings, goals, comparison datasets and allocation breakdowns are kept in
//! a single TOML file under the platform data directory. A missing file means
//! defaults populated with sample data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::comparison::{ComparisonMode, MonthlySales, PeriodComparison};
use crate::export::ExportFormat;
use crate::goals::{Goal, GoalCategory};
use crate::metrics::Slice;

/// Dashboard preference toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Dark theme
    pub dark_mode: bool,
    /// Show the notification feed
    pub notifications: bool,
    /// Periodically refresh data
    pub auto_refresh: bool,
    /// Refresh interval in seconds when auto refresh is on
    pub refresh_interval_secs: u32,
    /// Cache fetched data between refreshes
    pub data_caching: bool,
    /// Currency symbol used when rendering monetary values
    pub currency: String,
    /// Comparison mode selected on startup
    pub default_mode: ComparisonMode,
    /// Export format preselected in the export menu
    pub default_format: ExportFormat,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            auto_refresh: false,
            refresh_interval_secs: 30,
            data_caching: true,
            currency: "$".to_string(),
            default_mode: ComparisonMode::Month,
            default_format: ExportFormat::Json,
        }
    }
}

/// Account profile fields kept alongside the settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub email: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            email: "user@example.com".to_string(),
        }
    }
}

/// A named share-of-total breakdown (portfolio mix, sales by region, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    pub slices: Vec<Slice>,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Dashboard settings
    pub settings: DashboardSettings,
    /// Profile settings
    pub profile: ProfileSettings,
    /// Tracked goals
    pub goals: Vec<Goal>,
    /// Period comparisons
    pub comparisons: Vec<PeriodComparison>,
    /// Share-of-total breakdowns
    pub allocations: Vec<Allocation>,
    /// Monthly revenue and orders, oldest first
    pub sales: Vec<MonthlySales>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            settings: DashboardSettings::default(),
            profile: ProfileSettings::default(),
            goals: sample_goals(),
            comparisons: ComparisonMode::ALL
                .into_iter()
                .map(PeriodComparison::sample)
                .collect(),
            allocations: sample_allocations(),
            sales: MonthlySales::sample_year(),
        }
    }
}

impl AppConfig {
    /// Comparison for a mode, if configured.
    pub fn comparison(&self, mode: ComparisonMode) -> Option<&PeriodComparison> {
        self.comparisons.iter().find(|c| c.mode == mode)
    }
}

fn sample_goals() -> Vec<Goal> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        Goal::new(
            "Q3 Revenue Target",
            500_000.0,
            "$",
            date(2023, 9, 30),
            GoalCategory::Revenue,
        )
        .with_current(325_000.0),
        Goal::new(
            "New User Acquisition",
            10_000.0,
            "users",
            date(2023, 8, 31),
            GoalCategory::Growth,
        )
        .with_current(8_750.0),
        Goal::new(
            "Conversion Rate",
            5.0,
            "%",
            date(2023, 12, 31),
            GoalCategory::Conversion,
        )
        .with_current(3.2),
    ]
}

fn sample_allocations() -> Vec<Allocation> {
    vec![
        Allocation {
            name: "Portfolio".to_string(),
            slices: vec![
                Slice::new("Stocks", 150_000.0),
                Slice::new("Bonds", 50_000.0),
                Slice::new("Crypto", 30_000.0),
                Slice::new("Cash", 20_000.0),
            ],
        },
        Allocation {
            name: "Sales by Region".to_string(),
            slices: vec![
                Slice::new("North America", 840_250.0),
                Slice::new("Europe", 520_700.0),
                Slice::new("Asia", 325_000.0),
                Slice::new("Australia", 92_300.0),
                Slice::new("Other", 47_200.0),
            ],
        },
        Allocation {
            name: "Sales by Channel".to_string(),
            slices: vec![
                Slice::new("Online Store", 1_095_270.0),
                Slice::new("Marketplace", 456_360.0),
                Slice::new("Retail Stores", 192_370.0),
                Slice::new("Social Media", 82_450.0),
            ],
        },
    ]
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "bizdash", "Bizdash")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default path.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    // Ids written back so that later runs can address the same goals
    let assigned = config
        .goals
        .iter_mut()
        .map(Goal::ensure_id)
        .filter(|&assigned| assigned)
        .count();
    if assigned > 0 {
        tracing::info!(path = %path.display(), assigned, "Assigned ids to goals");
        save_config_to(&config, path)?;
    }

    tracing::info!(
        path = %path.display(),
        goals = config.goals.len(),
        comparisons = config.comparisons.len(),
        "Loaded config"
    );

    Ok(config)
}

/// Save application configuration to the default path.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!(path = %path.display(), "Saved config");
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_has_samples() {
        let config = AppConfig::default();
        assert_eq!(config.goals.len(), 3);
        assert_eq!(config.comparisons.len(), 3);
        assert!(config.comparison(ComparisonMode::Year).is_some());
        assert_eq!(config.settings.currency, "$");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.goals.len(), 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.settings.dark_mode = false;
        config.profile.email = "ops@example.com".to_string();
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert!(!loaded.settings.dark_mode);
        assert_eq!(loaded.profile.email, "ops@example.com");
        assert_eq!(loaded.goals, config.goals);
        assert_eq!(loaded.comparisons, config.comparisons);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[settings]
currency = "€"

[[goals]]
title = "Churn"
target = 2.0
current = 1.5
unit = "%"
deadline = "2024-03-31"
category = "engagement"
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.settings.currency, "€");
        assert!(config.settings.notifications);
        assert_eq!(config.goals.len(), 1);
        assert_eq!(config.goals[0].category, GoalCategory::Engagement);
        assert_eq!(config.comparisons.len(), 3);
    }

    #[test]
    fn test_goal_ids_assigned_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[[goals]]
title = "Churn"
target = 2.0
deadline = "2024-03-31"
"#,
        )
        .unwrap();

        let first = load_config_from(&path).unwrap();
        let second = load_config_from(&path).unwrap();

        assert!(!first.goals[0].id.is_nil());
        assert_eq!(first.goals[0].id, second.goals[0].id);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains(&first.goals[0].id.to_string()));
    }

    #[test]
    fn test_default_sales_series() {
        let config = AppConfig::default();
        assert_eq!(config.sales.len(), 12);
        assert_eq!(config.sales[0].month, "Jan");
        assert!(!config.sales[11].is_reported());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "settings = [").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
