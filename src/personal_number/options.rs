use serde::{Deserialize, Serialize};

/// Which variants of personal numbers a parse accepts.
/// The defaults accept coordination numbers and reject interim numbers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept a letter in place of the first serial digit
    pub allow_interim_number: bool,
    pub disable_coordination_number: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_interim_number(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.allow_interim_number = value)
    }

    pub fn disable_coordination_number(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.disable_coordination_number = value)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = *self;
        modify(&mut clone);
        clone
    }
}
