//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Mission-file store for raw waypoint files
//! - Per-drone lock registry serializing mission writes
//! - Parser strictness and status transition policy

use sea_orm::DatabaseConnection;

use crate::server::{
    data::mission_file::MissionFileStore, model::drone::TransitionPolicy,
    util::{lock::DroneLocks, qgc::ParseMode},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle, the lock registry
/// shares its map through an `Arc` and the store only holds its root path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory holding uploaded and loadable waypoint files.
    pub mission_files: MissionFileStore,

    /// Per-drone locks shared by every mission and drone write.
    pub drone_locks: DroneLocks,

    pub parse_mode: ParseMode,
    pub transition_policy: TransitionPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mission_files` - Mission-file store rooted at the configured directory
    /// - `parse_mode` - Treatment of malformed waypoint lines
    /// - `transition_policy` - Status change checking
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty lock registry
    pub fn new(
        db: DatabaseConnection,
        mission_files: MissionFileStore,
        parse_mode: ParseMode,
        transition_policy: TransitionPolicy,
    ) -> Self {
        Self {
            db,
            mission_files,
            drone_locks: DroneLocks::new(),
            parse_mode,
            transition_policy,
        }
    }
}
