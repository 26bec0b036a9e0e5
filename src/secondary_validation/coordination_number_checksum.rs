use crate::personal_number::PersonalNumber;
use crate::secondary_validation::Validator;

/// Accepts coordination numbers (samordningsnummer) only, i.e. personal numbers with
/// 60 added to the day of birth.
pub struct CoordinationNumberChecksum;

impl Validator for CoordinationNumberChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        // https://docs.swedenconnect.se/technical-framework/mirror/skv/skv707-2.pdf
        PersonalNumber::parse(regex_match.trim())
            .is_ok_and(|personal_number| personal_number.is_coordination_number())
    }
}
