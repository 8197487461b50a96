pub mod pet;
pub mod reservation;
pub mod service;

pub use pet::Pet;
pub use reservation::{NewReservation, Reservation, ReservationId};
pub use service::{Money, Service};
