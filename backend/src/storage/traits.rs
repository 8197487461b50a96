//! # Storage Traits
//!
//! Storage abstraction used by the domain services. The CSV implementation in
//! `storage::csv` is the only backend today; the services depend on these
//! traits so tests and alternative layouts can plug in their own.

use shared::ReportPeriod;

use crate::domain::errors::BoardingResult;
use crate::domain::models::{NewReservation, Reservation};
use crate::domain::report_service::SalesReport;

/// Whole-collection persistence for reservations
pub trait ReservationStorage: Send + Sync + Clone {
    /// Read every decodable record in file order. Undecodable lines are skipped.
    fn load_reservations(&self) -> BoardingResult<Vec<NewReservation>>;

    /// Replace the persisted collection with `reservations`
    fn save_reservations(&self, reservations: &[Reservation]) -> BoardingResult<()>;
}

/// Append-only log of sales report summaries
pub trait ReportLogStorage: Send + Sync + Clone {
    fn append_summary(&self, period: ReportPeriod, report: &SalesReport) -> BoardingResult<()>;
}

/// Factory for the repositories of one storage backend
pub trait Connection: Send + Sync + Clone {
    type ReservationRepository: ReservationStorage;
    type ReportLogRepository: ReportLogStorage;

    fn create_reservation_repository(&self) -> Self::ReservationRepository;

    fn create_report_log_repository(&self) -> Self::ReportLogRepository;
}
