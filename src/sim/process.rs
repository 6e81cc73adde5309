use super::error::SchedError;
use crate::core::state::Ticks;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Caller-facing description of one process in the batch. The library copies
/// specs into run-local state, so a spec list can be reused across runs and
/// algorithms without picking up stale mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
}

impl ProcessSpec {
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }
}

pub(crate) fn validate(specs: &[ProcessSpec]) -> Result<(), SchedError> {
    if specs.is_empty() {
        return Err(SchedError::InvalidProcessSet(
            "process set is empty".to_string(),
        ));
    }

    let mut seen = FxHashSet::default();
    for spec in specs {
        if spec.id.is_empty() {
            return Err(SchedError::InvalidProcessSet(
                "process id must be non-empty".to_string(),
            ));
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(SchedError::InvalidProcessSet(format!(
                "duplicate process id {:?}",
                spec.id
            )));
        }
        if spec.burst == 0 {
            return Err(SchedError::InvalidProcessSet(format!(
                "process {:?} has a zero burst time",
                spec.id
            )));
        }
    }

    Ok(())
}
