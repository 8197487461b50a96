use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use log::{debug, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::codec::{self, DELIMITER};
use super::connection::CsvConnection;
use crate::domain::errors::{BoardingError, BoardingResult};
use crate::domain::models::{NewReservation, Reservation};
use crate::storage::traits::ReservationStorage;

/// Flat-file reservation repository backed by `all_reservations.txt`
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    connection: CsvConnection,
}

impl ReservationRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read every decodable reservation from `path`.
    ///
    /// A missing file is an empty collection. Lines that fail to decode are
    /// logged and dropped so one corrupt line never hides the rest of the file.
    pub fn read_reservations(path: &Path) -> BoardingResult<Vec<NewReservation>> {
        if !path.exists() {
            info!("No reservations file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let file = File::open(path).map_err(|e| BoardingError::persistence(path, e))?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(DELIMITER)
            .from_reader(BufReader::new(file));

        let mut reservations = Vec::new();
        let mut skipped = 0usize;

        for (index, result) in csv_reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line() as usize).unwrap_or(index + 1);
                    warn!("Skipping unreadable reservation on line {}: {}", line, e);
                    skipped += 1;
                    continue;
                }
            };

            let line = record.position().map(|p| p.line() as usize).unwrap_or(index + 1);
            match codec::decode_record(&record, line) {
                Ok(reservation) => reservations.push(reservation),
                Err(e) => {
                    warn!("Skipping reservation: {}", e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!(
                "Loaded {} reservations from {} ({} malformed lines skipped)",
                reservations.len(),
                path.display(),
                skipped
            );
        } else {
            info!("Loaded {} reservations from {}", reservations.len(), path.display());
        }
        Ok(reservations)
    }

    /// Replace `path` with one line per reservation.
    ///
    /// The lines go to a temp file that is renamed over the destination, so a
    /// failed write leaves the previous file in place.
    pub fn write_reservations(path: &Path, reservations: &[Reservation]) -> BoardingResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| BoardingError::persistence(parent, e))?;
            }
        }

        let temp_path = path.with_extension("tmp");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| BoardingError::persistence(&temp_path, e))?;

        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .delimiter(DELIMITER)
            .from_writer(BufWriter::new(file));

        for reservation in reservations {
            csv_writer
                .write_record(codec::encode_fields(reservation))
                .map_err(|e| BoardingError::persistence(&temp_path, e))?;
        }
        csv_writer
            .flush()
            .map_err(|e| BoardingError::persistence(&temp_path, e))?;
        drop(csv_writer);

        fs::rename(&temp_path, path).map_err(|e| BoardingError::persistence(path, e))?;

        debug!("Wrote {} reservations to {}", reservations.len(), path.display());
        Ok(())
    }
}

impl ReservationStorage for ReservationRepository {
    fn load_reservations(&self) -> BoardingResult<Vec<NewReservation>> {
        Self::read_reservations(&self.connection.reservations_file_path())
    }

    fn save_reservations(&self, reservations: &[Reservation]) -> BoardingResult<()> {
        let path = self.connection.reservations_file_path();
        Self::write_reservations(&path, reservations)?;
        info!("Saved {} reservations to {}", reservations.len(), path.display());
        Ok(())
    }
}
