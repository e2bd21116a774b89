use thiserror::Error;

/// A referenced record or file does not exist.
///
/// Results in a 404 Not Found.
#[derive(Error, Debug, PartialEq)]
pub enum NotFoundError {
    #[error("Drone {0} not found")]
    Drone(i32),

    #[error("Mission file '{0}' not found")]
    MissionFile(String),
}
