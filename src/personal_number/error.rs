use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum PersonalNumberError {
    #[error("Invalid Swedish personal identity number")]
    Invalid,
}
