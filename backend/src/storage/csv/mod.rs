//! # CSV Storage Module
//!
//! Flat-file storage for reservations and report logs.
//!
//! ## File Format
//!
//! `all_reservations.txt` holds one reservation per line, ten comma-separated
//! fields, no header and no quoting:
//! ```text
//! Dog,Rex,24,Alice,555-0100,yes,no,yes,2024-06-03T09:00:00,2024-06-05T17:00:00
//! ```
//! Field values may not contain commas or line breaks; such values corrupt
//! the line they are written to, which is then skipped on the next load.
//!
//! The report logs (`weekly_sales_report.txt`, `monthly_sales_report.txt`) only
//! ever grow; each report run appends a three-line summary.

pub mod codec;
pub mod connection;
pub mod report_log_repository;
pub mod reservation_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use report_log_repository::ReportLogRepository;
pub use reservation_repository::ReservationRepository;
