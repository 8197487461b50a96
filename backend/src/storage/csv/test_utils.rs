/// Test utilities providing a throwaway data directory and sample records.
///
/// The temporary directory is removed when the environment is dropped, even
/// if the test panics.
use anyhow::Result;
use chrono::NaiveDateTime;
use tempfile::TempDir;

use super::connection::CsvConnection;
use crate::domain::datetime::parse_timestamp;
use crate::domain::models::{Pet, Reservation, ReservationId, Service};

pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

pub fn datetime(text: &str) -> NaiveDateTime {
    parse_timestamp(text).unwrap_or_else(|| panic!("bad test timestamp {}", text))
}

/// A dog stay with grooming and medical services (fee 250) ending 2024-06-05 17:00
pub fn sample_reservation(
    id: ReservationId,
    owner_name: &str,
    pet_name: &str,
    start_time: &str,
) -> Reservation {
    Reservation::new(
        id,
        Pet::new("Dog", pet_name, 24, owner_name, "555-0100"),
        Service::new("yes", "no", "yes"),
        datetime(start_time),
        datetime("2024-06-05T17:00:00"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
