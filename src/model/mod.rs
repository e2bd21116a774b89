//! Data transfer objects exchanged with callers of the HTTP API.

pub mod api;
pub mod drone;
pub mod waypoint;
