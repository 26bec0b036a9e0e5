mod error;
mod organization_type;

pub use error::OrganizationNumberError;
pub use organization_type::OrganizationType;

use crate::clock::{Clock, SystemClock};
use crate::digits::{clean_number, digits_to_int};
use crate::personal_number::{FormatLength, ParseOptions, PersonalNumber};
use crate::secondary_validation::luhn_valid;
use crate::stats::{NumberKind, Rejection};
use std::fmt;
use std::str::FromStr;

const NUMBER_LENGTH: usize = 10;

/// The only prefix allowed in front of a 10 digit organization number
const PREFIX: u32 = 16;
const PREFIX_LENGTH: usize = 2;

/// The first two digits must be at least this, i.e. no leading zero
const MIN_GROUP: u32 = 10;
/// The third and fourth digits must be at least this
const MIN_TYPE_DIGITS: u32 = 20;

const VAT_COUNTRY_CODE: &str = "SE";
const VAT_SUFFIX: &str = "01";

/// A valid Swedish organization number (organisationsnummer).
///
/// Sole proprietorships don't have an organization number of their own, the
/// personal number of the owner is used instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrganizationNumber {
    kind: OrganizationNumberKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum OrganizationNumberKind {
    PersonalNumber(PersonalNumber),
    /// 10 ASCII digits, without the `16` prefix
    Organization(String),
}

impl OrganizationNumber {
    pub fn parse(input: &str) -> Result<Self, OrganizationNumberError> {
        Self::parse_with_clock(input, &SystemClock)
    }

    /// The clock is only used when the input is a personal number
    pub fn parse_with_clock(
        input: &str,
        clock: &dyn Clock,
    ) -> Result<Self, OrganizationNumberError> {
        match Self::try_parse(input, clock) {
            Ok(organization_number) => {
                NumberKind::OrganizationNumber.record_parsed();
                Ok(organization_number)
            }
            Err(reason) => {
                NumberKind::OrganizationNumber.record_rejected(reason);
                Err(OrganizationNumberError::Invalid)
            }
        }
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    fn try_parse(input: &str, clock: &dyn Clock) -> Result<Self, Rejection> {
        if let Ok(personal_number) =
            PersonalNumber::try_parse(input, &ParseOptions::default(), clock)
        {
            return Ok(OrganizationNumber::from(personal_number));
        }

        let cleaned = clean_number(input, false).ok_or(Rejection::Format)?;
        let number = match cleaned.len() {
            NUMBER_LENGTH => cleaned.as_slice(),
            len if len == NUMBER_LENGTH + PREFIX_LENGTH => {
                let (prefix, number) = cleaned.split_at(PREFIX_LENGTH);
                if digits_to_int(prefix) != Some(PREFIX) {
                    return Err(Rejection::Prefix);
                }
                number
            }
            _ => return Err(Rejection::Format),
        };

        let group = digits_to_int(&number[0..2]).ok_or(Rejection::Format)?;
        let type_digits = digits_to_int(&number[2..4]).ok_or(Rejection::Format)?;
        if group < MIN_GROUP || type_digits < MIN_TYPE_DIGITS {
            return Err(Rejection::Group);
        }

        if !luhn_valid(number) {
            return Err(Rejection::Checksum);
        }

        let number = String::from_utf8(number.to_vec()).map_err(|_| Rejection::Format)?;
        Ok(OrganizationNumber {
            kind: OrganizationNumberKind::Organization(number),
        })
    }

    /// `NNNNNNNNNN`, or `NNNNNN-NNNN` with a separator
    pub fn format(&self, separator: bool) -> String {
        let number = match &self.kind {
            OrganizationNumberKind::PersonalNumber(personal_number) => {
                let long = personal_number.format(FormatLength::Long);
                long[2..].to_string()
            }
            OrganizationNumberKind::Organization(number) => number.clone(),
        };

        if separator {
            format!("{}-{}", &number[..6], &number[6..])
        } else {
            number
        }
    }

    pub fn organization_type(&self) -> OrganizationType {
        match &self.kind {
            OrganizationNumberKind::PersonalNumber(_) => OrganizationType::SoleProprietorship,
            OrganizationNumberKind::Organization(number) => number
                .bytes()
                .next()
                .map(OrganizationType::from_group_digit)
                .unwrap_or(OrganizationType::Unknown),
        }
    }

    pub fn entity_type(&self) -> &'static str {
        self.organization_type().label()
    }

    /// The VAT registration number, e.g. `SE556016068001`
    pub fn vat_number(&self) -> String {
        format!("{}{}{}", VAT_COUNTRY_CODE, self.format(false), VAT_SUFFIX)
    }

    pub fn is_personal_number(&self) -> bool {
        matches!(self.kind, OrganizationNumberKind::PersonalNumber(_))
    }

    pub fn as_personal_number(&self) -> Result<&PersonalNumber, OrganizationNumberError> {
        match &self.kind {
            OrganizationNumberKind::PersonalNumber(personal_number) => Ok(personal_number),
            OrganizationNumberKind::Organization(_) => {
                Err(OrganizationNumberError::NotPersonalNumber)
            }
        }
    }
}

impl From<PersonalNumber> for OrganizationNumber {
    fn from(personal_number: PersonalNumber) -> Self {
        OrganizationNumber {
            kind: OrganizationNumberKind::PersonalNumber(personal_number),
        }
    }
}

impl fmt::Display for OrganizationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl FromStr for OrganizationNumber {
    type Err = OrganizationNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
