/// Letters that may replace the first serial digit of an interim number.
pub const INTERIM_LETTERS: [u8; 11] = *b"TRSUWXJKLMN";

/// Characters stripped from the input before slicing it into components
const SEPARATORS: [char; 2] = ['+', '-'];

#[inline]
pub fn is_interim_letter(byte: u8) -> bool {
    INTERIM_LETTERS.contains(&byte)
}

/// Interprets ASCII digits as a base-10 integer, e.g. `b"08"` => 8.
/// Returns `None` if any byte is not a digit.
pub fn digits_to_int(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &byte| {
        let digit = char::from(byte).to_digit(10)?;
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// Removes every `+` and `-` from the input and returns the remaining bytes.
///
/// Any other character outside `0`-`9` rejects the whole input, unless it is an
/// interim letter and `allow_interim` is set.
pub fn clean_number(input: &str, allow_interim: bool) -> Option<Vec<u8>> {
    let mut clean = Vec::with_capacity(input.len());
    for c in input.chars() {
        if SEPARATORS.contains(&c) {
            continue;
        }
        if !c.is_ascii() {
            return None;
        }
        // ASCII was checked above so this cannot truncate
        let byte = c as u8;
        if byte.is_ascii_digit() || (allow_interim && is_interim_letter(byte)) {
            clean.push(byte);
        } else {
            return None;
        }
    }
    Some(clean)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_digits_to_int() {
        let test_cases = vec![
            ("0", Some(0)),
            ("08", Some(8)),
            ("16", Some(16)),
            ("1990", Some(1990)),
            ("", Some(0)),
            ("1a", None),
            ("T1", None),
        ];
        for (input, expected) in test_cases {
            assert_eq!(digits_to_int(input.as_bytes()), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn separators_are_stripped() {
        assert_eq!(
            clean_number("19900101-0017", false),
            Some(b"199001010017".to_vec())
        );
        assert_eq!(
            clean_number("900101+0017", false),
            Some(b"9001010017".to_vec())
        );
        assert_eq!(clean_number("-+-", false), Some(vec![]));
    }

    #[test]
    fn non_digit_characters_are_rejected() {
        for input in ["9001010017 ", "900101 0017", "90O1010017", "9001010017Å", "900101/0017"] {
            assert_eq!(clean_number(input, false), None, "input: {}", input);
        }
    }

    #[test]
    fn interim_letters_need_opt_in() {
        assert_eq!(clean_number("000101-T005", false), None);
        assert_eq!(
            clean_number("000101-T005", true),
            Some(b"000101T005".to_vec())
        );
        // Only the fixed set of placeholders is allowed
        assert_eq!(clean_number("000101-A005", true), None);
        assert_eq!(clean_number("000101-t005", true), None);
    }
}
