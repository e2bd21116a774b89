//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversion and parsing logic, or as payloads fed to the mission workflow.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // In-memory drone entity (no DB)
//! let drone = fixture::drone::entity();
//!
//! // Waypoint file body with three navigable lines
//! let payload = fixture::mission::three_waypoints();
//! ```

pub mod drone;
pub mod mission;
