use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum OrganizationNumberError {
    #[error("Invalid Swedish organization number")]
    Invalid,

    /// Only sole proprietorships are identified by a personal number
    #[error("The organization number is not a personal identity number")]
    NotPersonalNumber,
}
