//! Reservation service for the boarding core.
//!
//! Owns the in-memory `ReservationStore` and its repository. The collection is
//! loaded once on construction and written back after every mutation. When a
//! write fails the mutation stays in memory and the `Persistence` error is
//! returned, so the caller can retry with `save`.

use log::{error, info};
use std::sync::Arc;

use crate::domain::commands::reservations::{CreateReservationCommand, UpdateReservationCommand};
use crate::domain::errors::BoardingResult;
use crate::domain::models::{Reservation, ReservationId};
use crate::domain::reservation_store::ReservationStore;
use crate::storage::{Connection, ReservationStorage};

#[derive(Clone)]
pub struct ReservationService<C: Connection> {
    reservation_repository: C::ReservationRepository,
    store: ReservationStore,
}

impl<C: Connection> ReservationService<C> {
    /// Create the service and load the persisted reservations
    pub fn new(connection: Arc<C>) -> BoardingResult<Self> {
        let reservation_repository = connection.create_reservation_repository();
        let records = reservation_repository.load_reservations()?;
        let store = ReservationStore::from_records(records);
        if store.is_empty() {
            info!("Reservation service ready with no reservations");
        } else {
            info!("Reservation service ready with {} reservations", store.len());
        }
        Ok(Self {
            reservation_repository,
            store,
        })
    }

    /// Write the whole collection to disk
    pub fn save(&self) -> BoardingResult<()> {
        self.reservation_repository
            .save_reservations(self.store.list())
            .inspect_err(|e| error!("❌ Failed to save reservations: {}", e))
    }

    pub fn list(&self) -> &[Reservation] {
        self.store.list()
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.store.get(id)
    }

    pub fn find_by_owner(&self, owner_name: &str) -> Vec<&Reservation> {
        self.store.find_by_owner(owner_name)
    }

    pub fn find_first_by_owner(&self, owner_name: &str) -> Option<&Reservation> {
        self.store.find_first_by_owner(owner_name)
    }

    pub fn create(&mut self, command: &CreateReservationCommand) -> BoardingResult<Reservation> {
        let reservation = self.store.create(command)?.clone();
        info!(
            "✅ Reservation {} created for {} ({})",
            reservation.id, reservation.pet.owner_name, reservation.pet.name
        );
        self.save()?;
        Ok(reservation)
    }

    pub fn update_by_owner(
        &mut self,
        owner_name: &str,
        command: &UpdateReservationCommand,
    ) -> BoardingResult<Reservation> {
        let reservation = self.store.update_by_owner(owner_name, command)?.clone();
        info!("✅ Reservation {} updated", reservation.id);
        self.save()?;
        Ok(reservation)
    }

    pub fn update_by_id(
        &mut self,
        id: ReservationId,
        command: &UpdateReservationCommand,
    ) -> BoardingResult<Reservation> {
        let reservation = self.store.update_by_id(id, command)?.clone();
        info!("✅ Reservation {} updated", reservation.id);
        self.save()?;
        Ok(reservation)
    }

    pub fn delete_by_owner(&mut self, owner_name: &str) -> BoardingResult<Reservation> {
        let removed = self.store.delete_by_owner(owner_name)?;
        info!("🗑️ Reservation {} deleted for {}", removed.id, removed.pet.owner_name);
        self.save()?;
        Ok(removed)
    }

    pub fn delete_by_id(&mut self, id: ReservationId) -> BoardingResult<Reservation> {
        let removed = self.store.delete_by_id(id)?;
        info!("🗑️ Reservation {} deleted for {}", removed.id, removed.pet.owner_name);
        self.save()?;
        Ok(removed)
    }
}
