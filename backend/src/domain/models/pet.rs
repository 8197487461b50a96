//! Domain model for a boarded pet.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Species or breed as entered, e.g. "Dog"
    pub pet_type: String,
    pub name: String,
    pub age_months: u32,
    pub owner_name: String,
    pub owner_contact: String,
}

impl Pet {
    pub fn new(
        pet_type: impl Into<String>,
        name: impl Into<String>,
        age_months: u32,
        owner_name: impl Into<String>,
        owner_contact: impl Into<String>,
    ) -> Self {
        Self {
            pet_type: pet_type.into(),
            name: name.into(),
            age_months,
            owner_name: owner_name.into(),
            owner_contact: owner_contact.into(),
        }
    }

    /// Case-insensitive exact comparison against the owner's name
    pub fn is_owned_by(&self, owner_name: &str) -> bool {
        self.owner_name.to_lowercase() == owner_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_owned_by_ignores_case() {
        let pet = Pet::new("Dog", "Rex", 24, "Alice Smith", "555-0100");
        assert!(pet.is_owned_by("alice smith"));
        assert!(pet.is_owned_by("ALICE SMITH"));
        assert!(!pet.is_owned_by("Alice"));
    }
}
