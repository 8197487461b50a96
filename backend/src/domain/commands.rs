//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! part of the public DTO surface. Callers map the request types from the
//! `shared` crate to these internal types.

pub mod reservations {
    use chrono::NaiveDateTime;
    use log::warn;

    use crate::domain::datetime::parse_timestamp;
    use crate::domain::errors::{BoardingError, BoardingResult};
    use crate::domain::models::reservation::NewReservation;
    use crate::domain::models::{Pet, Reservation, ReservationId, Service};

    /// Raw field values for a new reservation, exactly as entered.
    #[derive(Debug, Clone, Default)]
    pub struct CreateReservationCommand {
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

    impl CreateReservationCommand {
        /// Parse the typed fields. Text fields are taken verbatim.
        pub fn validate(&self) -> BoardingResult<NewReservation> {
            let age_months = parse_age(&self.pet_age_months)?;
            let start_time = parse_time_field("start time", &self.start_time)?;
            let end_time = parse_time_field("end time", &self.end_time)?;

            Ok(NewReservation {
                pet: Pet::new(
                    self.pet_type.clone(),
                    self.pet_name.clone(),
                    age_months,
                    self.owner_name.clone(),
                    self.owner_contact.clone(),
                ),
                service: Service::new(
                    self.grooming.clone(),
                    self.special_feeding.clone(),
                    self.medical_services.clone(),
                ),
                start_time,
                end_time,
            })
        }
    }

    /// Replacement values for an existing reservation. `None` or whitespace
    /// keeps the current value.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateReservationCommand {
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

    impl UpdateReservationCommand {
        pub fn is_empty(&self) -> bool {
            [
                &self.pet_type,
                &self.pet_name,
                &self.pet_age_months,
                &self.owner_name,
                &self.owner_contact,
                &self.grooming,
                &self.special_feeding,
                &self.medical_services,
                &self.start_time,
                &self.end_time,
            ]
            .iter()
            .all(|field| supplied(*field).is_none())
        }

        /// Overwrite every supplied field of `reservation`.
        ///
        /// An age or timestamp that does not parse keeps the current value and
        /// is logged; the remaining fields are still applied.
        pub fn apply_to(&self, reservation: &mut Reservation) {
            let id = reservation.id;
            let pet = &mut reservation.pet;
            overwrite(&mut pet.pet_type, &self.pet_type);
            overwrite(&mut pet.name, &self.pet_name);
            if let Some(age_months) = parse_or_keep(id, &self.pet_age_months, parse_age) {
                pet.age_months = age_months;
            }
            overwrite(&mut pet.owner_name, &self.owner_name);
            overwrite(&mut pet.owner_contact, &self.owner_contact);

            let service = &mut reservation.service;
            overwrite(&mut service.grooming, &self.grooming);
            overwrite(&mut service.special_feeding, &self.special_feeding);
            overwrite(&mut service.medical_services, &self.medical_services);

            if let Some(start_time) = parse_or_keep(id, &self.start_time, |value| {
                parse_time_field("start time", value)
            }) {
                reservation.start_time = start_time;
            }
            if let Some(end_time) = parse_or_keep(id, &self.end_time, |value| {
                parse_time_field("end time", value)
            }) {
                reservation.end_time = end_time;
            }
        }
    }

    fn parse_or_keep<T>(
        id: ReservationId,
        field: &Option<String>,
        parse: impl FnOnce(&str) -> BoardingResult<T>,
    ) -> Option<T> {
        let value = supplied(field)?;
        parse(value)
            .inspect_err(|e| warn!("Reservation {}: {}, keeping the current value", id, e))
            .ok()
    }

    fn supplied(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|value| !value.trim().is_empty())
    }

    fn overwrite(target: &mut String, replacement: &Option<String>) {
        if let Some(value) = supplied(replacement) {
            *target = value.to_string();
        }
    }

    fn parse_age(value: &str) -> BoardingResult<u32> {
        value.trim().parse::<u32>().map_err(|_| BoardingError::Validation {
            field: "age",
            value: value.to_string(),
        })
    }

    fn parse_time_field(field: &'static str, value: &str) -> BoardingResult<NaiveDateTime> {
        parse_timestamp(value).ok_or_else(|| BoardingError::Validation {
            field,
            value: value.to_string(),
        })
    }

}
