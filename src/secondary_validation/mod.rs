mod coordination_number_checksum;
mod luhn_checksum;
mod sweden_organization_number_checksum;
mod sweden_pin_checksum;

pub use crate::secondary_validation::coordination_number_checksum::CoordinationNumberChecksum;
pub use crate::secondary_validation::luhn_checksum::{luhn_valid, LuhnChecksum};
pub use crate::secondary_validation::sweden_organization_number_checksum::SwedenOrganizationNumberChecksum;
pub use crate::secondary_validation::sweden_pin_checksum::SwedenPINChecksum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Validators that can be selected from a configuration
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    LuhnChecksum,
    SwedenPINChecksum,
    CoordinationNumberChecksum,
    SwedenOrganizationNumberChecksum,
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::LuhnChecksum => LuhnChecksum.is_valid_match(regex_match),
            SecondaryValidator::SwedenPINChecksum => SwedenPINChecksum.is_valid_match(regex_match),
            SecondaryValidator::CoordinationNumberChecksum => {
                CoordinationNumberChecksum.is_valid_match(regex_match)
            }
            SecondaryValidator::SwedenOrganizationNumberChecksum => {
                SwedenOrganizationNumberChecksum.is_valid_match(regex_match)
            }
        }
    }
}
