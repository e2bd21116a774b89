//! SeaORM entity models for the drone fleet store.

pub mod prelude;

pub mod drone;
pub mod waypoint;
