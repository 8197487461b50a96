//! # Boarding Configuration
//!
//! Settings are stored as `boarding_config.yaml` at the root of the data
//! directory:
//!
//! ```yaml
//! reservations_file: all_reservations.txt
//! weekly_report_file: weekly_sales_report.txt
//! monthly_report_file: monthly_sales_report.txt
//! data_format_version: "1.0"
//! ```
//!
//! A missing file is created with the defaults above. Missing keys in an
//! existing file fall back to their defaults.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "boarding_config.yaml";

/// Environment variable naming the data directory when no flag is given
pub const DATA_DIR_ENV: &str = "PET_BOARDING_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardingConfig {
    pub reservations_file: String,
    pub weekly_report_file: String,
    pub monthly_report_file: String,
    pub data_format_version: String,
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self {
            reservations_file: "all_reservations.txt".to_string(),
            weekly_report_file: "weekly_sales_report.txt".to_string(),
            monthly_report_file: "monthly_sales_report.txt".to_string(),
            data_format_version: "1.0".to_string(),
        }
    }
}

impl BoardingConfig {
    pub fn config_path(data_directory: &Path) -> PathBuf {
        data_directory.join(CONFIG_FILE_NAME)
    }

    /// Load the config from `data_directory`, writing the defaults if absent
    pub fn load_or_create(data_directory: &Path) -> Result<Self> {
        let config_path = Self::config_path(data_directory);

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: BoardingConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
            debug!("Loaded boarding config from {:?}", config_path);
            Ok(config)
        } else {
            let config = BoardingConfig::default();
            config.save(data_directory)?;
            info!("Created default boarding config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Write the config atomically: temp file first, then rename
    pub fn save(&self, data_directory: &Path) -> Result<()> {
        if !data_directory.exists() {
            fs::create_dir_all(data_directory)
                .with_context(|| format!("Failed to create {}", data_directory.display()))?;
            info!("Created data directory: {:?}", data_directory);
        }

        let config_path = Self::config_path(data_directory);
        let yaml_content = serde_yaml::to_string(self)?;
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to replace {}", config_path.display()))?;

        debug!("Saved boarding config to {:?}", config_path);
        Ok(())
    }
}

/// Pick the data directory: explicit choice, then `PET_BOARDING_DATA_DIR`,
/// then the current directory
pub fn resolve_data_directory(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match std::env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            info!("Using data directory from {}: {}", DATA_DIR_ENV, path);
            Ok(PathBuf::from(path))
        }
        _ => std::env::current_dir().context("Could not determine the current directory"),
    }
}
