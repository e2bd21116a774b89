//! Drone data repository for database operations.
//!
//! This module provides the `DroneRepository` for managing drone records. The repository
//! is generic over the connection so the same queries run against the pool or inside a
//! transaction opened by the service layer.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::drone::{
    CreateDroneParam, Drone, DroneStatus, Position, UpdateDroneParam,
};

/// Repository providing database operations for the drone registry.
pub struct DroneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DroneRepository<'a, C> {
    /// Creates a new DroneRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `DroneRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new drone with creation and update timestamps set to now.
    ///
    /// # Arguments
    /// - `param` - Validated creation parameters with defaults applied
    ///
    /// # Returns
    /// - `Ok(Drone)` - The created drone with generated ID
    /// - `Err(DbErr)` - Database error, including a duplicate serial number
    pub async fn create(&self, param: CreateDroneParam) -> Result<Drone, DbErr> {
        let now = Utc::now();
        let entity = entity::drone::ActiveModel {
            name: ActiveValue::Set(param.name),
            model: ActiveValue::Set(param.model),
            serial_number: ActiveValue::Set(param.serial_number),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            battery_level: ActiveValue::Set(param.battery_level),
            current_latitude: ActiveValue::Set(param.current_latitude),
            current_longitude: ActiveValue::Set(param.current_longitude),
            current_altitude: ActiveValue::Set(param.current_altitude),
            max_flight_time: ActiveValue::Set(param.max_flight_time),
            max_speed: ActiveValue::Set(param.max_speed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Drone::from_entity(entity)
    }

    /// Gets a drone by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - Drone found
    /// - `Ok(None)` - No drone with this ID
    /// - `Err(DbErr)` - Database error or corrupt stored status
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Drone>, DbErr> {
        entity::prelude::Drone::find_by_id(id)
            .one(self.db)
            .await?
            .map(Drone::from_entity)
            .transpose()
    }

    /// Gets every drone, newest first.
    ///
    /// Ties on creation time are broken by descending ID.
    pub async fn get_all(&self) -> Result<Vec<Drone>, DbErr> {
        entity::prelude::Drone::find()
            .order_by_desc(entity::drone::Column::CreatedAt)
            .order_by_desc(entity::drone::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Drone::from_entity)
            .collect()
    }

    /// Checks whether a drone with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Drone::find()
            .filter(entity::drone::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update.
    ///
    /// Only `Some` fields are written. An update without any field leaves the record,
    /// including `updated_at`, untouched and returns it as stored.
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - The drone after the update
    /// - `Ok(None)` - No drone with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateDroneParam) -> Result<Option<Drone>, DbErr> {
        let Some(drone) = entity::prelude::Drone::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Drone::from_entity(drone).map(Some);
        }

        let mut active_model: entity::drone::ActiveModel = drone.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(model) = param.model {
            active_model.model = ActiveValue::Set(model);
        }
        if let Some(serial_number) = param.serial_number {
            active_model.serial_number = ActiveValue::Set(serial_number);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(battery_level) = param.battery_level {
            active_model.battery_level = ActiveValue::Set(battery_level);
        }
        if let Some(latitude) = param.current_latitude {
            active_model.current_latitude = ActiveValue::Set(Some(latitude));
        }
        if let Some(longitude) = param.current_longitude {
            active_model.current_longitude = ActiveValue::Set(Some(longitude));
        }
        if let Some(altitude) = param.current_altitude {
            active_model.current_altitude = ActiveValue::Set(Some(altitude));
        }
        if let Some(max_flight_time) = param.max_flight_time {
            active_model.max_flight_time = ActiveValue::Set(max_flight_time);
        }
        if let Some(max_speed) = param.max_speed {
            active_model.max_speed = ActiveValue::Set(max_speed);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Drone::from_entity(entity).map(Some)
    }

    /// Sets a drone's status.
    ///
    /// # Returns
    /// - `Ok(true)` - Status written
    /// - `Ok(false)` - No drone with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, id: i32, status: DroneStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::update_many()
            .col_expr(entity::drone::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::drone::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::drone::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets a drone's battery level. The value is written as given.
    ///
    /// # Returns
    /// - `Ok(true)` - Battery level written
    /// - `Ok(false)` - No drone with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_battery(&self, id: i32, battery_level: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::update_many()
            .col_expr(
                entity::drone::Column::BatteryLevel,
                Expr::value(battery_level),
            )
            .col_expr(entity::drone::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::drone::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets a drone's current position.
    ///
    /// # Returns
    /// - `Ok(true)` - Position written
    /// - `Ok(false)` - No drone with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_position(&self, id: i32, position: Position) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::update_many()
            .col_expr(
                entity::drone::Column::CurrentLatitude,
                Expr::value(position.latitude),
            )
            .col_expr(
                entity::drone::Column::CurrentLongitude,
                Expr::value(position.longitude),
            )
            .col_expr(
                entity::drone::Column::CurrentAltitude,
                Expr::value(position.altitude),
            )
            .col_expr(entity::drone::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::drone::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a drone after removing all of its waypoints.
    ///
    /// Both deletes run on the repository's connection; run it on a transaction to
    /// make them one unit.
    ///
    /// # Returns
    /// - `Ok(true)` - Drone deleted
    /// - `Ok(false)` - No drone with this ID
    /// - `Err(DbErr)` - Database error during either delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Waypoint::delete_many()
            .filter(entity::waypoint::Column::DroneId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Drone::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
