use thiserror::Error;

use crate::server::model::drone::DroneStatus;

/// Caller-supplied data failed a domain rule.
///
/// Results in a 400 Bad Request with the error message returned to the client.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A mandatory drone attribute was absent or empty.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Status is not one of `idle`, `flying`, `landing`, `charging`, `maintenance`, `error`.
    #[error("Invalid status '{0}'")]
    InvalidStatus(String),

    /// Status change rejected by the strict transition table.
    #[error("Cannot change status from {from} to {to}")]
    InvalidTransition { from: DroneStatus, to: DroneStatus },

    /// Mission file name is empty or would escape the mission-file store.
    #[error("Invalid mission file name '{0}'")]
    InvalidFileName(String),
}
