use std::error::Error;
use std::fmt::{self, Display};

/// A rejected call. Validation runs before any simulation state is built, so
/// an error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// Empty process set, blank or duplicate id, or zero burst time.
    InvalidProcessSet(String),
    /// Unusable algorithm parameter: zero quantum, or empty/zero level quanta.
    InvalidParameter(String),
}

impl Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedError::InvalidProcessSet(why) => write!(f, "invalid process set: {why}"),
            SchedError::InvalidParameter(why) => write!(f, "invalid parameter: {why}"),
        }
    }
}

impl Error for SchedError {}
