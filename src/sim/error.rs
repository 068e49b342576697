use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submission was not admitted. Every variant is recoverable: the
/// scheduler state is untouched and the caller may retry later.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmitError {
    #[error("implementation capacity exceeded: {current} in use, {available} available, {needed} needed")]
    CapacityExceeded {
        current: u32,
        available: u32,
        needed: u32,
    },

    #[error("requirements not met: {}", .reasons.join("; "))]
    RequirementsNotMet { reasons: Vec<String> },

    #[error("rejected by admission gate: {reason}")]
    ExternallyRejected { reason: String },

    #[error("invalid policy template: {reason}")]
    InvalidTemplate { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RestoreError {
    #[error("implementation id {id} appears more than once")]
    DuplicateId { id: u64 },

    #[error("implementation {id} has invalid template: {reason}")]
    InvalidTemplate { id: u64, reason: String },
}
