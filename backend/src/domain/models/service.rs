//! Domain model for the optional add-on services of a stay.
use serde::{Deserialize, Serialize};

/// Fee charged per add-on service, in whole currency units
pub type Money = u64;

pub const GROOMING_FEE: Money = 100;
pub const SPECIAL_FEEDING_FEE: Money = 75;
pub const MEDICAL_SERVICES_FEE: Money = 150;

/// Add-on services requested for a stay.
///
/// The flags are kept as the text the customer entered ("yes"/"no"). Anything
/// other than a case-insensitive "yes" counts as not requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub grooming: String,
    pub special_feeding: String,
    pub medical_services: String,
}

impl Service {
    pub fn new(
        grooming: impl Into<String>,
        special_feeding: impl Into<String>,
        medical_services: impl Into<String>,
    ) -> Self {
        Self {
            grooming: grooming.into(),
            special_feeding: special_feeding.into(),
            medical_services: medical_services.into(),
        }
    }

    /// Sum of the fees for every flag set to "yes"
    pub fn total_fee(&self) -> Money {
        let mut total = 0;
        if is_yes(&self.grooming) {
            total += GROOMING_FEE;
        }
        if is_yes(&self.special_feeding) {
            total += SPECIAL_FEEDING_FEE;
        }
        if is_yes(&self.medical_services) {
            total += MEDICAL_SERVICES_FEE;
        }
        total
    }
}

fn is_yes(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("yes")
}
