use serde::{Deserialize, Serialize};
use std::fmt;

/// A reservation as presented to callers of the boarding core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDto {
    /// Session-scoped identifier assigned by the store (not persisted)
    pub id: u64,
    pub pet_type: String,
    pub pet_name: String,
    /// Age of the pet in months
    pub pet_age_months: u32,
    pub owner_name: String,
    pub owner_contact: String,
    /// "yes"/"no" flags exactly as entered
    pub grooming: String,
    pub special_feeding: String,
    pub medical_services: String,
    /// Drop-off time, ISO 8601 without offset (e.g. 2024-06-03T09:30:00)
    pub start_time: String,
    /// Pick-up time, ISO 8601 without offset
    pub end_time: String,
    /// Sum of the add-on service fees
    pub total_fee: u64,
}

/// Raw field values for a new reservation.
///
/// Age and timestamps are kept as text so that parsing failures can be
/// reported by the core as validation errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub pet_type: String,
    pub pet_name: String,
    pub pet_age_months: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub grooming: String,
    pub special_feeding: String,
    pub medical_services: String,
    pub start_time: String,
    pub end_time: String,
}

/// Replacement values for an existing reservation.
///
/// `None` or a blank string keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    pub pet_type: Option<String>,
    pub pet_name: Option<String>,
    pub pet_age_months: Option<String>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub grooming: Option<String>,
    pub special_feeding: Option<String>,
    pub medical_services: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Which kind of periodic sales report was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    Weekly,
    Monthly,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportPeriod::Weekly => write!(f, "weekly"),
            ReportPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

/// Result of a weekly or monthly sales report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportDto {
    pub period: ReportPeriod,
    /// Inclusive window start (ISO 8601)
    pub window_start: String,
    /// Exclusive window end (ISO 8601)
    pub window_end: String,
    pub total_earnings: u64,
    /// Reservations whose start time falls inside the window
    pub reservations: Vec<ReservationDto>,
}
