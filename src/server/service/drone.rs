//! Drone registry service.
//!
//! Wraps the drone repository with the registry rules: lookups are augmented with the
//! drone's waypoint count and last waypoint update, missing drones become
//! `NotFoundError::Drone`, and status changes pass through the configured
//! [`TransitionPolicy`]. Deletion is serialized with mission writes through the
//! per-drone lock and runs in a single transaction.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{drone::DroneRepository, waypoint::WaypointRepository},
    error::{not_found::NotFoundError, AppError},
    model::drone::{
        CreateDroneParam, Drone, DroneStatus, DroneSummary, Position, TransitionPolicy,
        UpdateDroneParam,
    },
    util::lock::DroneLocks,
};

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DroneLocks,
    policy: TransitionPolicy,
}

impl<'a> DroneService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a DroneLocks,
        policy: TransitionPolicy,
    ) -> Self {
        Self { db, locks, policy }
    }

    /// Gets all drones, newest first, with their mission summary.
    pub async fn get_all(&self) -> Result<Vec<DroneSummary>, AppError> {
        let drones = DroneRepository::new(self.db).get_all().await?;

        let mut summaries = Vec::with_capacity(drones.len());
        for drone in drones {
            summaries.push(summarize(self.db, drone).await?);
        }

        Ok(summaries)
    }

    /// Gets one drone with its mission summary.
    ///
    /// # Returns
    /// - `Ok(Some(DroneSummary))` - Drone found
    /// - `Ok(None)` - No drone with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneSummary>, AppError> {
        match DroneRepository::new(self.db).get_by_id(id).await? {
            Some(drone) => Ok(Some(summarize(self.db, drone).await?)),
            None => Ok(None),
        }
    }

    /// Registers a new drone.
    ///
    /// # Returns
    /// - `Ok(DroneSummary)` - Created drone, no waypoints yet
    /// - `Err(AppError::DbErr)` - Database error, e.g. duplicate serial number
    pub async fn create(&self, param: CreateDroneParam) -> Result<DroneSummary, AppError> {
        let drone = DroneRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Registered drone {} ({}) with serial {}",
            drone.id,
            drone.name,
            drone.serial_number
        );

        Ok(DroneSummary {
            drone,
            waypoint_count: 0,
            last_waypoint_update: None,
        })
    }

    /// Applies a partial update.
    ///
    /// A status carried in the update is checked against the transition policy. An
    /// update without fields returns the current record.
    ///
    /// # Returns
    /// - `Ok(DroneSummary)` - Drone after the update
    /// - `Err(AppError::NotFoundErr)` - No drone with this ID
    /// - `Err(AppError::ValidationErr)` - Strict policy rejected the status change
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateDroneParam) -> Result<DroneSummary, AppError> {
        let id = param.id;

        let updated = match (param.status, self.policy) {
            (Some(next), TransitionPolicy::Strict) => {
                let _guard = self.locks.acquire(id).await;
                self.check_transition(id, next).await?;
                DroneRepository::new(self.db).update(param).await?
            }
            _ => DroneRepository::new(self.db).update(param).await?,
        };

        let drone = updated.ok_or(NotFoundError::Drone(id))?;

        summarize(self.db, drone).await
    }

    /// Changes a drone's status.
    ///
    /// Under the strict policy the read-check-write sequence holds the drone's lock.
    ///
    /// # Returns
    /// - `Ok(DroneSummary)` - Drone with the new status
    /// - `Err(AppError::NotFoundErr)` - No drone with this ID
    /// - `Err(AppError::ValidationErr)` - Strict policy rejected the change
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: DroneStatus,
    ) -> Result<DroneSummary, AppError> {
        let repo = DroneRepository::new(self.db);

        let written = match self.policy {
            TransitionPolicy::Strict => {
                let _guard = self.locks.acquire(id).await;
                self.check_transition(id, status).await?;
                repo.update_status(id, status).await?
            }
            TransitionPolicy::Permissive => repo.update_status(id, status).await?,
        };

        if !written {
            return Err(NotFoundError::Drone(id).into());
        }

        tracing::info!("Drone {} status set to {}", id, status);

        self.require(id).await
    }

    /// Sets a drone's battery level as given.
    ///
    /// # Returns
    /// - `Ok(DroneSummary)` - Drone with the new battery level
    /// - `Err(AppError::NotFoundErr)` - No drone with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_battery(
        &self,
        id: i32,
        battery_level: i32,
    ) -> Result<DroneSummary, AppError> {
        if !DroneRepository::new(self.db)
            .update_battery(id, battery_level)
            .await?
        {
            return Err(NotFoundError::Drone(id).into());
        }

        self.require(id).await
    }

    /// Sets a drone's current position as given.
    ///
    /// # Returns
    /// - `Ok(DroneSummary)` - Drone at the new position
    /// - `Err(AppError::NotFoundErr)` - No drone with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_position(
        &self,
        id: i32,
        position: Position,
    ) -> Result<DroneSummary, AppError> {
        if !DroneRepository::new(self.db)
            .update_position(id, position)
            .await?
        {
            return Err(NotFoundError::Drone(id).into());
        }

        self.require(id).await
    }

    /// Deletes a drone together with its mission.
    ///
    /// Waits for any in-flight mission write on the drone, then removes waypoints and
    /// drone in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Drone and waypoints removed
    /// - `Err(AppError::NotFoundErr)` - No drone with this ID
    /// - `Err(AppError::DbErr)` - Database error, nothing removed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let _guard = self.locks.acquire(id).await;

        let txn = self.db.begin().await?;
        if !DroneRepository::new(&txn).delete(id).await? {
            txn.rollback().await?;
            return Err(NotFoundError::Drone(id).into());
        }
        txn.commit().await?;

        tracing::info!("Deleted drone {} and its mission", id);

        Ok(())
    }

    async fn check_transition(&self, id: i32, next: DroneStatus) -> Result<(), AppError> {
        let current = DroneRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Drone(id))?;

        self.policy.check(current.status, next)?;

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<DroneSummary, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Drone(id).into())
    }
}

/// Attaches waypoint count and last waypoint update to a drone.
async fn summarize<C: ConnectionTrait>(db: &C, drone: Drone) -> Result<DroneSummary, AppError> {
    let waypoint_repo = WaypointRepository::new(db);
    let waypoint_count = waypoint_repo.count_by_drone(drone.id).await?;
    let last_waypoint_update = waypoint_repo.last_created_at(drone.id).await?;

    Ok(DroneSummary {
        drone,
        waypoint_count,
        last_waypoint_update,
    })
}
