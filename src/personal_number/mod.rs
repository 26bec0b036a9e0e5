mod error;
mod options;

pub use error::PersonalNumberError;
pub use options::ParseOptions;

use crate::calendar::{coordination_day, is_valid_date, COORDINATION_DAY_OFFSET};
use crate::clock::{Clock, SystemClock};
use crate::digits::{clean_number, digits_to_int, is_interim_letter};
use crate::secondary_validation::luhn_valid;
use crate::stats::{NumberKind, Rejection};
use chrono::{Datelike, NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;
use strum::Display;

const LENGTH_WITH_CENTURY: usize = 12;
const LENGTH_WITHOUT_CENTURY: usize = 10;

/// Subjects of at least this age are written with a `+` separator
const CENTENARIAN_AGE: i64 = 100;

/// Length of an average Gregorian year (365.2425 days)
const MILLIS_PER_YEAR: i64 = 31_556_952_000;

/// Index of the first serial character in a number without century
const SERIAL_START: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatLength {
    /// `YYMMDD-SSSC`
    #[default]
    Short,
    /// `CCYYMMDDSSSC`
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Separator {
    #[strum(serialize = "-")]
    Minus,
    /// The subject is 100 years or older
    #[strum(serialize = "+")]
    Plus,
}

/// A valid Swedish personal identity number (personnummer), including coordination
/// numbers (samordningsnummer) and, if allowed, interim numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonalNumber {
    century: u8,
    year: u8,
    month: u8,
    /// As written, i.e. with the offset of coordination numbers
    day: u8,
    serial: String,
    check: u8,
    separator: Separator,
    date: NaiveDate,
}

impl PersonalNumber {
    pub fn parse(input: &str) -> Result<Self, PersonalNumberError> {
        Self::parse_with_options(input, &ParseOptions::default())
    }

    pub fn parse_with_options(
        input: &str,
        options: &ParseOptions,
    ) -> Result<Self, PersonalNumberError> {
        Self::parse_with_clock(input, options, &SystemClock)
    }

    /// Parses a personal number using `clock` to resolve the century of numbers
    /// written without one.
    pub fn parse_with_clock(
        input: &str,
        options: &ParseOptions,
        clock: &dyn Clock,
    ) -> Result<Self, PersonalNumberError> {
        match Self::try_parse(input, options, clock) {
            Ok(personal_number) => {
                NumberKind::PersonalNumber.record_parsed();
                Ok(personal_number)
            }
            Err(reason) => {
                NumberKind::PersonalNumber.record_rejected(reason);
                Err(PersonalNumberError::Invalid)
            }
        }
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    pub fn is_valid_with_options(input: &str, options: &ParseOptions) -> bool {
        Self::parse_with_options(input, options).is_ok()
    }

    /// Parses without reporting metrics. The error says which rule rejected the input.
    pub(crate) fn try_parse(
        input: &str,
        options: &ParseOptions,
        clock: &dyn Clock,
    ) -> Result<Self, Rejection> {
        if input.is_empty() {
            return Err(Rejection::Format);
        }

        let cleaned =
            clean_number(input, options.allow_interim_number).ok_or(Rejection::Format)?;
        let (century_digits, number) = match cleaned.len() {
            LENGTH_WITH_CENTURY => {
                let (century_digits, number) = cleaned.split_at(2);
                (Some(century_digits), number)
            }
            LENGTH_WITHOUT_CENTURY => (None, cleaned.as_slice()),
            _ => return Err(Rejection::Format),
        };

        let (date_digits, rest) = number.split_at(SERIAL_START);
        let (serial, check) = rest.split_at(3);
        if serial == b"000" {
            return Err(Rejection::Format);
        }
        // Interim letters may only replace the first serial digit
        if !serial[1..].iter().all(u8::is_ascii_digit) {
            return Err(Rejection::Format);
        }

        let year = two_digits(&date_digits[0..2])?;
        let month = two_digits(&date_digits[2..4])?;
        let day = two_digits(&date_digits[4..6])?;
        let check = u8::try_from(digits_to_int(check).ok_or(Rejection::Format)?)
            .map_err(|_| Rejection::Format)?;
        if !(1..=12).contains(&month) {
            return Err(Rejection::Date);
        }

        let current_year = i64::from(clock.now().year());
        let (full_year, separator) = match century_digits {
            Some(century_digits) => {
                let century = i64::from(two_digits(century_digits)?);
                let full_year = century * 100 + i64::from(year);
                let separator = if current_year - full_year < CENTENARIAN_AGE {
                    Separator::Minus
                } else {
                    Separator::Plus
                };
                (full_year, separator)
            }
            None => {
                let plus = input.contains('+');
                let (base_year, separator) = if plus {
                    (current_year - CENTENARIAN_AGE, Separator::Plus)
                } else {
                    (current_year, Separator::Minus)
                };
                let full_year = base_year - (base_year - i64::from(year)).rem_euclid(100);
                (full_year, separator)
            }
        };
        let century = u8::try_from(full_year.div_euclid(100))
            .ok()
            .filter(|century| *century < 100)
            .ok_or(Rejection::Format)?;

        let mut luhn_digits = number.to_vec();
        if let Some(first_serial) = luhn_digits.get_mut(SERIAL_START) {
            if is_interim_letter(*first_serial) {
                *first_serial = b'1';
            }
        }
        if !luhn_valid(&luhn_digits) {
            return Err(Rejection::Checksum);
        }

        let birth_day = coordination_day(u32::from(day));
        let full_year_u32 = u32::try_from(full_year).map_err(|_| Rejection::Format)?;
        if !is_valid_date(full_year_u32, u32::from(month), birth_day) {
            return Err(Rejection::Date);
        }
        let date = i32::try_from(full_year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, u32::from(month), birth_day))
            .ok_or(Rejection::Date)?;

        let personal_number = PersonalNumber {
            century,
            year,
            month,
            day,
            serial: String::from_utf8(serial.to_vec()).map_err(|_| Rejection::Format)?,
            check,
            separator,
            date,
        };

        if personal_number.is_coordination_number() && options.disable_coordination_number {
            return Err(Rejection::Options);
        }
        if personal_number.is_interim_number() && !options.allow_interim_number {
            return Err(Rejection::Options);
        }

        Ok(personal_number)
    }

    pub fn format(&self, length: FormatLength) -> String {
        match length {
            FormatLength::Long => format!(
                "{:02}{:02}{:02}{:02}{}{}",
                self.century, self.year, self.month, self.day, self.serial, self.check
            ),
            FormatLength::Short => format!(
                "{:02}{:02}{:02}{}{}{}",
                self.year, self.month, self.day, self.separator, self.serial, self.check
            ),
        }
    }

    /// Whole years since the birth date, using average Gregorian years
    pub fn age(&self) -> i64 {
        self.age_with_clock(&SystemClock)
    }

    pub fn age_with_clock(&self, clock: &dyn Clock) -> i64 {
        let birth = self.date.and_time(NaiveTime::default()).and_utc();
        (clock.now() - birth)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_YEAR)
    }

    /// The third serial digit is odd for men and even for women
    pub fn is_male(&self) -> bool {
        self.serial
            .bytes()
            .nth(2)
            .and_then(|byte| char::from(byte).to_digit(10))
            .is_some_and(|digit| digit % 2 == 1)
    }

    pub fn is_female(&self) -> bool {
        !self.is_male()
    }

    pub fn is_coordination_number(&self) -> bool {
        let day = u32::from(self.day);
        day > COORDINATION_DAY_OFFSET
            && is_valid_date(
                u32::from(self.full_year()),
                u32::from(self.month),
                day - COORDINATION_DAY_OFFSET,
            )
    }

    pub fn is_interim_number(&self) -> bool {
        self.serial.bytes().next().is_some_and(is_interim_letter)
    }

    /// Birth date, with the coordination offset removed from the day
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn century(&self) -> u8 {
        self.century
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn full_year(&self) -> u16 {
        u16::from(self.century) * 100 + u16::from(self.year)
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day as written in the number, 61-91 for coordination numbers
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn check(&self) -> u8 {
        self.check
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }
}

fn two_digits(digits: &[u8]) -> Result<u8, Rejection> {
    digits_to_int(digits)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(Rejection::Format)
}

impl fmt::Display for PersonalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatLength::Short))
    }
}

impl FromStr for PersonalNumber {
    type Err = PersonalNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
