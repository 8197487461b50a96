//! Domain model for a reservation.
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::service::{Money, Service};

/// Identifier assigned by the store when a reservation is loaded or created.
/// It lives only as long as the in-memory collection and is never written to disk.
pub type ReservationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub pet: Pet,
    pub service: Service,
    /// Drop-off time (local, no offset)
    pub start_time: NaiveDateTime,
    /// Pick-up time; not required to be after `start_time`
    pub end_time: NaiveDateTime,
}

/// Reservation contents before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub pet: Pet,
    pub service: Service,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl NewReservation {
    pub fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation::new(id, self.pet, self.service, self.start_time, self.end_time)
    }
}

impl Reservation {
    pub fn new(
        id: ReservationId,
        pet: Pet,
        service: Service,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            pet,
            service,
            start_time,
            end_time,
        }
    }

    pub fn total_fee(&self) -> Money {
        self.service.total_fee()
    }

    /// Length of the stay. Negative when the pick-up time precedes drop-off.
    pub fn stay_duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// True when every field except the session id matches
    #[cfg(test)]
    pub fn same_record(&self, other: &Reservation) -> bool {
        self.pet == other.pet
            && self.service == other.service
            && self.start_time == other.start_time
            && self.end_time == other.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn sample(id: ReservationId) -> Reservation {
        Reservation::new(
            id,
            Pet::new("Cat", "Milo", 18, "Bob", "555-0101"),
            Service::new("no", "yes", "yes"),
            at(3, 9),
            at(5, 17),
        )
    }

    #[test]
    fn test_stay_duration() {
        assert_eq!(sample(1).stay_duration(), Duration::hours(56));
    }

    #[test]
    fn test_stay_duration_can_be_negative() {
        let mut reservation = sample(1);
        reservation.end_time = at(2, 9);
        assert!(reservation.stay_duration() < Duration::zero());
    }

    #[test]
    fn test_same_record_ignores_id() {
        assert!(sample(1).same_record(&sample(7)));
        let mut other = sample(1);
        other.pet.name = "Luna".to_string();
        assert!(!sample(1).same_record(&other));
    }

    #[test]
    fn test_total_fee_delegates_to_service() {
        assert_eq!(sample(1).total_fee(), 225);
    }
}
