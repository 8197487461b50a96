//! In-memory reservation collection.
//!
//! The store keeps reservations in creation order and hands out a session id
//! for each one. Owner-keyed operations use first-match semantics: when several
//! reservations share an owner name, the earliest one in the collection is the
//! one updated or deleted. The id-keyed variants let a caller pick a specific
//! reservation after looking at `find_by_owner`.
//!
//! The store never touches the filesystem; see `ReservationService` for the
//! persisted variant.

use log::{debug, warn};

use crate::domain::commands::reservations::{CreateReservationCommand, UpdateReservationCommand};
use crate::domain::errors::{BoardingError, BoardingResult};
use crate::domain::models::{NewReservation, Reservation, ReservationId};

#[derive(Debug, Clone)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    next_id: ReservationId,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from decoded records, keeping their order
    pub fn from_records(records: impl IntoIterator<Item = NewReservation>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Append a record and assign it the next session id
    pub fn insert(&mut self, record: NewReservation) -> &Reservation {
        let id = self.next_id;
        self.next_id += 1;
        let index = self.reservations.len();
        self.reservations.push(record.into_reservation(id));
        &self.reservations[index]
    }

    /// Validate raw field values and append the new reservation.
    /// No duplicate check is made.
    pub fn create(&mut self, command: &CreateReservationCommand) -> BoardingResult<&Reservation> {
        let record = command.validate()?;
        let reservation = self.insert(record);
        debug!(
            "Created reservation {} for owner '{}'",
            reservation.id, reservation.pet.owner_name
        );
        Ok(reservation)
    }

    /// Every reservation in collection order
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|reservation| reservation.id == id)
    }

    /// All reservations whose owner name matches case-insensitively
    pub fn find_by_owner(&self, owner_name: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|reservation| reservation.pet.is_owned_by(owner_name))
            .collect()
    }

    pub fn find_first_by_owner(&self, owner_name: &str) -> Option<&Reservation> {
        self.position_by_owner(owner_name)
            .map(|index| &self.reservations[index])
    }

    pub fn update_by_owner(
        &mut self,
        owner_name: &str,
        command: &UpdateReservationCommand,
    ) -> BoardingResult<&Reservation> {
        let index = self
            .position_by_owner(owner_name)
            .ok_or_else(|| BoardingError::NotFound(format!("owner '{}'", owner_name)))?;
        self.update_at(index, command)
    }

    pub fn update_by_id(
        &mut self,
        id: ReservationId,
        command: &UpdateReservationCommand,
    ) -> BoardingResult<&Reservation> {
        let index = self.position_by_id(id)?;
        self.update_at(index, command)
    }

    pub fn delete_by_owner(&mut self, owner_name: &str) -> BoardingResult<Reservation> {
        let index = self
            .position_by_owner(owner_name)
            .ok_or_else(|| BoardingError::NotFound(format!("owner '{}'", owner_name)))?;
        Ok(self.reservations.remove(index))
    }

    pub fn delete_by_id(&mut self, id: ReservationId) -> BoardingResult<Reservation> {
        let index = self.position_by_id(id)?;
        Ok(self.reservations.remove(index))
    }

    fn update_at(
        &mut self,
        index: usize,
        command: &UpdateReservationCommand,
    ) -> BoardingResult<&Reservation> {
        let reservation = &mut self.reservations[index];
        command.apply_to(reservation);
        debug!("Updated reservation {}", reservation.id);
        Ok(&self.reservations[index])
    }

    fn position_by_id(&self, id: ReservationId) -> BoardingResult<usize> {
        self.reservations
            .iter()
            .position(|reservation| reservation.id == id)
            .ok_or_else(|| BoardingError::NotFound(format!("id {}", id)))
    }

    fn position_by_owner(&self, owner_name: &str) -> Option<usize> {
        let matches = self.find_by_owner(owner_name).len();
        if matches > 1 {
            warn!(
                "Owner '{}' has {} reservations; using the earliest one",
                owner_name, matches
            );
        }
        self.reservations
            .iter()
            .position(|reservation| reservation.pet.is_owned_by(owner_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(owner: &str, pet_name: &str, start: &str) -> CreateReservationCommand {
        CreateReservationCommand {
            pet_type: "Dog".to_string(),
            pet_name: pet_name.to_string(),
            pet_age_months: "12".to_string(),
            owner_name: owner.to_string(),
            owner_contact: "555-0100".to_string(),
            grooming: "yes".to_string(),
            special_feeding: "no".to_string(),
            medical_services: "no".to_string(),
            start_time: start.to_string(),
            end_time: "2024-06-20T10:00:00".to_string(),
        }
    }

    fn populated_store() -> ReservationStore {
        let mut store = ReservationStore::new();
        store.create(&command("Alice", "Rex", "2024-06-03T09:00:00")).unwrap();
        store.create(&command("Bob", "Milo", "2024-06-04T09:00:00")).unwrap();
        store.create(&command("alice", "Luna", "2024-06-05T09:00:00")).unwrap();
        store
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = populated_store();
        let ids: Vec<_> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_create_rejects_invalid_fields_without_appending() {
        let mut store = populated_store();
        let mut bad = command("Carol", "Kiwi", "2024-06-05T09:00:00");
        bad.pet_age_months = "twelve".to_string();
        assert!(matches!(store.create(&bad), Err(BoardingError::Validation { .. })));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_by_owner_is_case_insensitive() {
        let store = populated_store();
        let upper: Vec<_> = store.find_by_owner("Alice").iter().map(|r| r.id).collect();
        let lower: Vec<_> = store.find_by_owner("alice").iter().map(|r| r.id).collect();
        assert_eq!(upper, vec![1, 3]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_find_by_owner_without_match_is_empty() {
        assert!(populated_store().find_by_owner("Zed").is_empty());
    }

    #[test]
    fn test_update_by_owner_hits_first_match_only() {
        let mut store = populated_store();
        let update = UpdateReservationCommand {
            pet_name: Some("Rocky".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_owner("ALICE", &update).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(store.get(1).unwrap().pet.name, "Rocky");
        assert_eq!(store.get(3).unwrap().pet.name, "Luna");
    }

    #[test]
    fn test_update_partial_overwrite_keeps_other_fields() {
        let mut store = populated_store();
        let before = store.get(2).unwrap().clone();
        let update = UpdateReservationCommand {
            pet_name: Some("Tiger".to_string()),
            ..Default::default()
        };
        store.update_by_owner("bob", &update).unwrap();

        let after = store.get(2).unwrap();
        assert_eq!(after.pet.name, "Tiger");
        assert_eq!(after.pet.pet_type, before.pet.pet_type);
        assert_eq!(after.pet.age_months, before.pet.age_months);
        assert_eq!(after.pet.owner_contact, before.pet.owner_contact);
        assert_eq!(after.service, before.service);
        assert_eq!(after.start_time, before.start_time);
        assert_eq!(after.end_time, before.end_time);
    }

    #[test]
    fn test_update_with_unparsable_age_still_renames() {
        let mut store = populated_store();
        let update = UpdateReservationCommand {
            pet_name: Some("Max".to_string()),
            pet_age_months: Some("old".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_owner("alice", &update).unwrap();
        assert_eq!(updated.pet.name, "Max");
        assert_eq!(updated.pet.age_months, 12);
    }

    #[test]
    fn test_update_unknown_owner_is_not_found() {
        let mut store = populated_store();
        let result = store.update_by_owner("Nobody", &UpdateReservationCommand::default());
        assert!(matches!(result, Err(BoardingError::NotFound(_))));
    }

    #[test]
    fn test_update_by_id_targets_duplicate_owner() {
        let mut store = populated_store();
        let update = UpdateReservationCommand {
            medical_services: Some("YES".to_string()),
            ..Default::default()
        };
        store.update_by_id(3, &update).unwrap();
        assert_eq!(store.get(3).unwrap().total_fee(), 250);
        assert_eq!(store.get(1).unwrap().total_fee(), 100);
    }

    #[test]
    fn test_delete_by_owner_removes_first_match_and_keeps_order() {
        let mut store = populated_store();
        let removed = store.delete_by_owner("alice").unwrap();
        assert_eq!(removed.pet.name, "Rex");
        let names: Vec<_> = store.list().iter().map(|r| r.pet.name.as_str()).collect();
        assert_eq!(names, vec!["Milo", "Luna"]);
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut store = populated_store();
        assert!(matches!(store.delete_by_owner("Zed"), Err(BoardingError::NotFound(_))));
        assert!(matches!(store.delete_by_id(42), Err(BoardingError::NotFound(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = populated_store();
        store.delete_by_id(3).unwrap();
        let created = store.create(&command("Dan", "Pip", "2024-06-06T09:00:00")).unwrap();
        assert_eq!(created.id, 4);
    }
}
