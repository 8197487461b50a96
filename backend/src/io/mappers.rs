use shared::{CreateReservationRequest, ReservationDto, SalesReportDto, UpdateReservationRequest};

use crate::domain::commands::reservations::{CreateReservationCommand, UpdateReservationCommand};
use crate::domain::datetime::format_timestamp;
use crate::domain::models::Reservation;
use crate::domain::SalesReport;

pub struct ReservationMapper;

impl ReservationMapper {
    /// Convert domain Reservation to shared ReservationDto
    pub fn to_dto(domain: &Reservation) -> ReservationDto {
        ReservationDto {
            id: domain.id,
            pet_type: domain.pet.pet_type.clone(),
            pet_name: domain.pet.name.clone(),
            pet_age_months: domain.pet.age_months,
            owner_name: domain.pet.owner_name.clone(),
            owner_contact: domain.pet.owner_contact.clone(),
            grooming: domain.service.grooming.clone(),
            special_feeding: domain.service.special_feeding.clone(),
            medical_services: domain.service.medical_services.clone(),
            start_time: format_timestamp(&domain.start_time),
            end_time: format_timestamp(&domain.end_time),
            total_fee: domain.total_fee(),
        }
    }

    pub fn to_dto_list<'a>(domain: impl IntoIterator<Item = &'a Reservation>) -> Vec<ReservationDto> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn create_request_to_command(request: CreateReservationRequest) -> CreateReservationCommand {
        CreateReservationCommand {
            pet_type: request.pet_type,
            pet_name: request.pet_name,
            pet_age_months: request.pet_age_months,
            owner_name: request.owner_name,
            owner_contact: request.owner_contact,
            grooming: request.grooming,
            special_feeding: request.special_feeding,
            medical_services: request.medical_services,
            start_time: request.start_time,
            end_time: request.end_time,
        }
    }

    pub fn update_request_to_command(request: UpdateReservationRequest) -> UpdateReservationCommand {
        UpdateReservationCommand {
            pet_type: request.pet_type,
            pet_name: request.pet_name,
            pet_age_months: request.pet_age_months,
            owner_name: request.owner_name,
            owner_contact: request.owner_contact,
            grooming: request.grooming,
            special_feeding: request.special_feeding,
            medical_services: request.medical_services,
            start_time: request.start_time,
            end_time: request.end_time,
        }
    }
}

pub struct SalesReportMapper;

impl SalesReportMapper {
    pub fn to_dto(report: &SalesReport) -> SalesReportDto {
        SalesReportDto {
            period: report.period,
            window_start: format_timestamp(&report.window.start),
            window_end: format_timestamp(&report.window.end),
            total_earnings: report.total_earnings,
            reservations: ReservationMapper::to_dto_list(&report.reservations),
        }
    }
}
