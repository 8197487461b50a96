//! # Storage Module
//!
//! Persistence for the boarding core: the reservations file and the sales
//! report logs. Domain services only see the traits in `traits`; the flat-file
//! implementation lives in `csv`.

pub mod csv;
pub mod traits;

pub use traits::{Connection, ReportLogStorage, ReservationStorage};
