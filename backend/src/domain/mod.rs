//! # Domain Module
//!
//! Business logic of the boarding core: the entity models, the in-memory
//! reservation store, reservation persistence orchestration and the periodic
//! sales reports. Nothing in here prompts a user or renders output.

pub mod commands;
pub mod datetime;
pub mod errors;
pub mod models;
pub mod report_service;
pub mod reservation_service;
pub mod reservation_store;

pub use errors::{BoardingError, BoardingResult};
pub use report_service::{ReportService, ReportWindow, SalesReport};
pub use reservation_service::ReservationService;
pub use reservation_store::ReservationStore;
