use crate::secondary_validation::Validator;

/// Value of a digit after doubling it and summing the digits of the product
const DOUBLED_DIGITS: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks the Luhn (mod 10) checksum of a sequence of ASCII digits, the last one being
/// the check digit. Any non-digit byte makes the sequence invalid.
pub fn luhn_valid(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    // Every other digit is doubled, starting from the one left of the check digit
    let doubled_parity = digits.len() & 1;
    let mut sum = 0;
    for (index, byte) in digits.iter().enumerate() {
        let Some(digit) = char::from(*byte).to_digit(10) else {
            return false;
        };
        if index & 1 == doubled_parity {
            sum += DOUBLED_DIGITS[digit as usize];
        } else {
            sum += digit;
        }
    }
    sum % 10 == 0
}

/// Luhn checksum over free text: every non-digit character is skipped.
pub struct LuhnChecksum;

impl Validator for LuhnChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let digits: Vec<u8> = regex_match.bytes().filter(u8::is_ascii_digit).collect();
        luhn_valid(&digits)
    }
}
