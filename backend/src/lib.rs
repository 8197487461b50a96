//! # Pet Boarding Backend
//!
//! Reservation records for a pet-boarding business: a flat-file store with
//! create/search/update/delete operations and weekly or monthly earnings
//! reports. Presentation is left to the caller; the `pet-boarding` binary is
//! a thin command-line driver over [`Backend`].

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

pub use config::BoardingConfig;
pub use storage::csv::CsvConnection;

/// Wires configuration, storage and the domain services together
pub struct Backend {
    pub connection: Arc<CsvConnection>,
    pub reservation_service: domain::ReservationService<CsvConnection>,
    pub report_service: domain::ReportService<CsvConnection>,
}

impl Backend {
    /// Open (or initialize) the data directory and load the reservations
    pub fn open(data_directory: &Path) -> Result<Self> {
        let config = BoardingConfig::load_or_create(data_directory)?;
        let connection = Arc::new(
            CsvConnection::with_config(data_directory, config)
                .context("Failed to open data directory")?,
        );

        let reservation_service = domain::ReservationService::new(connection.clone())
            .context("Failed to load reservations")?;
        let report_service = domain::ReportService::new(connection.clone());

        info!(
            "Backend opened at {} (data format {})",
            connection.base_directory().display(),
            connection.config().data_format_version
        );
        Ok(Self {
            connection,
            reservation_service,
            report_service,
        })
    }
}
