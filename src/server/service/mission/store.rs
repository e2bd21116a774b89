//! Atomic mission replacement and clearing.
//!
//! Every write takes the drone's lock and runs in one transaction that first confirms
//! the drone still exists. Readers do not lock; the transaction boundary means they
//! observe either the previous or the new waypoint set.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{drone::DroneRepository, waypoint::WaypointRepository},
    error::{not_found::NotFoundError, AppError},
    model::waypoint::{ParsedWaypoint, Waypoint},
    util::lock::DroneLocks,
};

pub struct MissionStore<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DroneLocks,
}

impl<'a> MissionStore<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a DroneLocks) -> Self {
        Self { db, locks }
    }

    /// Replaces a drone's mission with `waypoints`.
    ///
    /// All rows share one creation time. Either the old set is fully removed and the
    /// new one fully inserted, or nothing changes.
    ///
    /// # Arguments
    /// - `drone_id` - Drone whose mission is replaced
    /// - `waypoints` - Parsed waypoints in sequence order, all tagged with `drone_id`
    ///
    /// # Returns
    /// - `Ok(Vec<Waypoint>)` - The stored mission
    /// - `Err(AppError::NotFoundErr)` - Drone does not exist
    /// - `Err(AppError::InternalError)` - A waypoint is tagged with another drone
    /// - `Err(AppError::DbErr)` - Database error, previous mission kept
    pub async fn replace(
        &self,
        drone_id: i32,
        waypoints: Vec<ParsedWaypoint>,
    ) -> Result<Vec<Waypoint>, AppError> {
        if let Some(stray) = waypoints.iter().find(|w| w.drone_id != drone_id) {
            return Err(AppError::InternalError(format!(
                "Waypoint {} for drone {} passed to mission replace of drone {}",
                stray.sequence_number, stray.drone_id, drone_id
            )));
        }

        let _guard = self.locks.acquire(drone_id).await;

        let txn = self.db.begin().await?;
        if !DroneRepository::new(&txn).exists(drone_id).await? {
            txn.rollback().await?;
            return Err(NotFoundError::Drone(drone_id).into());
        }

        let waypoint_repo = WaypointRepository::new(&txn);
        let removed = waypoint_repo.delete_by_drone(drone_id).await?;
        let stored = waypoint_repo.insert_many(waypoints, Utc::now()).await?;
        txn.commit().await?;

        tracing::info!(
            "Replaced mission of drone {}: {} waypoints removed, {} stored",
            drone_id,
            removed,
            stored.len()
        );

        Ok(stored)
    }

    /// Removes a drone's mission.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of waypoints removed, 0 when there was no mission
    /// - `Err(AppError::NotFoundErr)` - Drone does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn clear(&self, drone_id: i32) -> Result<u64, AppError> {
        let _guard = self.locks.acquire(drone_id).await;

        let txn = self.db.begin().await?;
        if !DroneRepository::new(&txn).exists(drone_id).await? {
            txn.rollback().await?;
            return Err(NotFoundError::Drone(drone_id).into());
        }

        let removed = WaypointRepository::new(&txn)
            .delete_by_drone(drone_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Cleared mission of drone {}: {} waypoints removed",
            drone_id,
            removed
        );

        Ok(removed)
    }

    /// Gets the drone's current mission ordered by sequence number.
    pub async fn list(&self, drone_id: i32) -> Result<Vec<Waypoint>, AppError> {
        Ok(WaypointRepository::new(self.db).get_by_drone(drone_id).await?)
    }
}
