use crate::organization_number::OrganizationNumber;
use crate::secondary_validation::Validator;

/// Accepts organization numbers, which includes the personal numbers of sole
/// proprietorships.
pub struct SwedenOrganizationNumberChecksum;

impl Validator for SwedenOrganizationNumberChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        OrganizationNumber::is_valid(regex_match.trim())
    }
}
