use log::info;
use shared::ReportPeriod;
use std::fs;
use std::path::{Path, PathBuf};

use super::report_log_repository::ReportLogRepository;
use super::reservation_repository::ReservationRepository;
use crate::config::BoardingConfig;
use crate::domain::errors::{BoardingError, BoardingResult};
use crate::storage::traits::Connection;

/// CsvConnection owns the data directory and resolves the data file paths
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    config: BoardingConfig,
}

impl CsvConnection {
    /// Create a connection with the default file names
    pub fn new<P: AsRef<Path>>(base_directory: P) -> BoardingResult<Self> {
        Self::with_config(base_directory, BoardingConfig::default())
    }

    /// Create a connection, creating the base directory if it doesn't exist
    pub fn with_config<P: AsRef<Path>>(
        base_directory: P,
        config: BoardingConfig,
    ) -> BoardingResult<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(|e| BoardingError::persistence(&base_path, e))?;
            info!("Created data directory {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            config,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn config(&self) -> &BoardingConfig {
        &self.config
    }

    pub fn reservations_file_path(&self) -> PathBuf {
        self.base_directory.join(&self.config.reservations_file)
    }

    pub fn report_file_path(&self, period: ReportPeriod) -> PathBuf {
        let file_name = match period {
            ReportPeriod::Weekly => &self.config.weekly_report_file,
            ReportPeriod::Monthly => &self.config.monthly_report_file,
        };
        self.base_directory.join(file_name)
    }
}

impl Connection for CsvConnection {
    type ReservationRepository = ReservationRepository;
    type ReportLogRepository = ReportLogRepository;

    fn create_reservation_repository(&self) -> Self::ReservationRepository {
        ReservationRepository::new(self.clone())
    }

    fn create_report_log_repository(&self) -> Self::ReportLogRepository {
        ReportLogRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_base_directory() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join("boarding");
        let connection = CsvConnection::new(&data_dir)?;
        assert!(data_dir.is_dir());
        assert_eq!(connection.base_directory(), data_dir.as_path());
        Ok(())
    }

    #[test]
    fn test_file_paths_follow_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = BoardingConfig {
            reservations_file: "bookings.txt".to_string(),
            weekly_report_file: "week.log".to_string(),
            ..BoardingConfig::default()
        };
        let connection = CsvConnection::with_config(temp_dir.path(), config)?;

        assert_eq!(connection.reservations_file_path(), temp_dir.path().join("bookings.txt"));
        assert_eq!(connection.report_file_path(ReportPeriod::Weekly), temp_dir.path().join("week.log"));
        assert_eq!(
            connection.report_file_path(ReportPeriod::Monthly),
            temp_dir.path().join("monthly_sales_report.txt")
        );
        Ok(())
    }
}
