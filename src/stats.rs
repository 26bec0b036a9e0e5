use metrics::counter;
use strum::IntoStaticStr;

const KIND: &str = "kind";
const REASON: &str = "reason";

pub const PARSED_METRIC: &str = "swedish_id.parsed";
pub const REJECTED_METRIC: &str = "swedish_id.rejected";

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NumberKind {
    PersonalNumber,
    OrganizationNumber,
}

/// Why a number was rejected. This is only reported through metrics, callers always
/// get the single generic error of the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rejection {
    /// Wrong length or characters
    Format,
    /// The month or day does not exist
    Date,
    Checksum,
    /// Coordination or interim number not allowed by the parse options
    Options,
    /// 12 digit organization number not starting with `16`
    Prefix,
    /// Organization group or type digits below their minimum
    Group,
}

impl NumberKind {
    pub fn record_parsed(self) {
        let kind: &'static str = self.into();
        counter!(PARSED_METRIC, KIND => kind).increment(1);
    }

    pub fn record_rejected(self, reason: Rejection) {
        let kind: &'static str = self.into();
        let reason: &'static str = reason.into();
        counter!(REJECTED_METRIC, KIND => kind, REASON => reason).increment(1);
    }
}
