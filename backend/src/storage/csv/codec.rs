//! Line codec for the reservations file.
//!
//! Field order is fixed: type, name, age, owner name, owner contact, grooming,
//! special feeding, medical services, start time, end time.

use csv::StringRecord;

use crate::domain::datetime::{format_timestamp, parse_timestamp};
use crate::domain::errors::{BoardingError, BoardingResult};
use crate::domain::models::{NewReservation, Pet, Reservation, Service};

pub const DELIMITER: u8 = b',';
pub const FIELD_COUNT: usize = 10;

pub fn encode_fields(reservation: &Reservation) -> [String; FIELD_COUNT] {
    let pet = &reservation.pet;
    let service = &reservation.service;
    [
        pet.pet_type.clone(),
        pet.name.clone(),
        pet.age_months.to_string(),
        pet.owner_name.clone(),
        pet.owner_contact.clone(),
        service.grooming.clone(),
        service.special_feeding.clone(),
        service.medical_services.clone(),
        format_timestamp(&reservation.start_time),
        format_timestamp(&reservation.end_time),
    ]
}

/// Render a reservation as a single line, without the trailing newline
#[cfg(test)]
pub fn encode_line(reservation: &Reservation) -> String {
    encode_fields(reservation).join(",")
}

/// Decode one line of the reservations file. `line` is only used for error reporting.
#[cfg(test)]
pub fn decode_line(text: &str, line: usize) -> BoardingResult<NewReservation> {
    let fields: Vec<&str> = text
        .trim_end_matches(['\r', '\n'])
        .split(DELIMITER as char)
        .collect();
    decode_fields(&fields, line)
}

pub fn decode_record(record: &StringRecord, line: usize) -> BoardingResult<NewReservation> {
    let fields: Vec<&str> = record.iter().collect();
    decode_fields(&fields, line)
}

fn decode_fields(fields: &[&str], line: usize) -> BoardingResult<NewReservation> {
    if fields.len() != FIELD_COUNT {
        return Err(BoardingError::malformed(
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let age_months = fields[2]
        .trim()
        .parse::<u32>()
        .map_err(|_| BoardingError::malformed(line, format!("invalid age '{}'", fields[2])))?;
    let start_time = parse_timestamp(fields[8])
        .ok_or_else(|| BoardingError::malformed(line, format!("invalid start time '{}'", fields[8])))?;
    let end_time = parse_timestamp(fields[9])
        .ok_or_else(|| BoardingError::malformed(line, format!("invalid end time '{}'", fields[9])))?;

    Ok(NewReservation {
        pet: Pet::new(fields[0], fields[1], age_months, fields[3], fields[4]),
        service: Service::new(fields[5], fields[6], fields[7]),
        start_time,
        end_time,
    })
}
