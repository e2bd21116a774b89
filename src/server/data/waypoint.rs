//! Waypoint data repository for database operations.
//!
//! Waypoints are only ever written as a complete mission. The repository does not
//! coordinate replace operations itself; the mission store composes `delete_by_drone`
//! and `insert_many` inside one transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::waypoint::{ParsedWaypoint, Waypoint};

/// Repository providing database operations for drone waypoints.
pub struct WaypointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaypointRepository<'a, C> {
    /// Creates a new WaypointRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `WaypointRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a drone's waypoints ordered by sequence number ascending.
    ///
    /// An unknown drone yields an empty list.
    pub async fn get_by_drone(&self, drone_id: i32) -> Result<Vec<Waypoint>, DbErr> {
        let entities = entity::prelude::Waypoint::find()
            .filter(entity::waypoint::Column::DroneId.eq(drone_id))
            .order_by_asc(entity::waypoint::Column::SequenceNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Waypoint::from_entity).collect())
    }

    /// Inserts waypoints in the given order, all stamped with `created_at`.
    ///
    /// # Arguments
    /// - `waypoints` - Parsed waypoints with their sequence numbers assigned
    /// - `created_at` - Load time recorded on every row
    ///
    /// # Returns
    /// - `Ok(Vec<Waypoint>)` - Inserted waypoints with generated IDs
    /// - `Err(DbErr)` - Database error, e.g. foreign key or duplicate sequence number
    pub async fn insert_many(
        &self,
        waypoints: Vec<ParsedWaypoint>,
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Waypoint>, DbErr> {
        let mut inserted = Vec::with_capacity(waypoints.len());

        for waypoint in waypoints {
            let entity = entity::waypoint::ActiveModel {
                drone_id: ActiveValue::Set(waypoint.drone_id),
                sequence_number: ActiveValue::Set(waypoint.sequence_number),
                command: ActiveValue::Set(waypoint.command),
                param1: ActiveValue::Set(waypoint.param1),
                param2: ActiveValue::Set(waypoint.param2),
                param3: ActiveValue::Set(waypoint.param3),
                param4: ActiveValue::Set(waypoint.param4),
                latitude: ActiveValue::Set(waypoint.latitude),
                longitude: ActiveValue::Set(waypoint.longitude),
                altitude: ActiveValue::Set(waypoint.altitude),
                auto_continue: ActiveValue::Set(waypoint.auto_continue),
                source_file: ActiveValue::Set(waypoint.source_file),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            inserted.push(Waypoint::from_entity(entity));
        }

        Ok(inserted)
    }

    /// Deletes every waypoint of a drone.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of waypoints removed, 0 when the drone had none
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_drone(&self, drone_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Waypoint::delete_many()
            .filter(entity::waypoint::Column::DroneId.eq(drone_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts a drone's waypoints.
    pub async fn count_by_drone(&self, drone_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Waypoint::find()
            .filter(entity::waypoint::Column::DroneId.eq(drone_id))
            .count(self.db)
            .await
    }

    /// Gets the creation time of a drone's most recently created waypoint.
    pub async fn last_created_at(&self, drone_id: i32) -> Result<Option<DateTime<Utc>>, DbErr> {
        entity::prelude::Waypoint::find()
            .select_only()
            .column(entity::waypoint::Column::CreatedAt)
            .filter(entity::waypoint::Column::DroneId.eq(drone_id))
            .order_by_desc(entity::waypoint::Column::CreatedAt)
            .into_tuple::<DateTime<Utc>>()
            .one(self.db)
            .await
    }
}
