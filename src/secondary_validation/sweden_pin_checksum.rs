use crate::personal_number::PersonalNumber;
use crate::secondary_validation::Validator;

/// Accepts personal identity numbers, including coordination numbers.
pub struct SwedenPINChecksum;

impl Validator for SwedenPINChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        PersonalNumber::is_valid(regex_match.trim())
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn validate_swedish_pins() {
        let swedish_pins = vec![
            "640823-3234",
            "196408233234",
            " 850709-9805 ",
            "701063-2391",
        ];
        for pin in swedish_pins {
            assert!(SwedenPINChecksum.is_valid_match(pin), "{}", pin);
        }
    }

    #[test]
    fn test_invalid_swedish_pins() {
        let invalid_swedish_pins = vec![
            "640823-3235",
            "990431-1231",
            "640823 3234",
            // interim numbers are not accepted
            "000101-T006",
            "",
        ];
        for pin in invalid_swedish_pins {
            assert!(!SwedenPINChecksum.is_valid_match(pin), "{}", pin);
        }
    }
}
