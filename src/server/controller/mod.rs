//! HTTP request handlers.
//!
//! Controllers extract path and body parameters, convert DTOs into domain parameters,
//! call the matching service and wrap the result in the JSON success envelope. Errors
//! are returned as `AppError` and rendered by its `IntoResponse` implementation.

pub mod drone;
pub mod mission_file;
pub mod waypoint;
