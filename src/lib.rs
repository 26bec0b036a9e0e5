// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod calendar;
mod clock;
mod digits;
mod organization_number;
mod personal_number;
mod secondary_validation;
mod stats;

// This is the public API of the library
pub use clock::{Clock, FixedClock, SystemClock};
pub use organization_number::{OrganizationNumber, OrganizationNumberError, OrganizationType};
pub use personal_number::{
    FormatLength, ParseOptions, PersonalNumber, PersonalNumberError, Separator,
};
pub use secondary_validation::{
    CoordinationNumberChecksum, LuhnChecksum, SecondaryValidator, SwedenOrganizationNumberChecksum,
    SwedenPINChecksum, Validator,
};
pub use stats::{PARSED_METRIC, REJECTED_METRIC};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::{
    calendar::is_valid_date,
    digits::{clean_number, digits_to_int},
    secondary_validation::luhn_valid,
};
