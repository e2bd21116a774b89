//! Drone factory for creating test drone entities.
//!
//! This module provides factory methods for creating drone entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::drone::DroneFactory;
///
/// let drone = DroneFactory::new(&db)
///     .serial_number("SN-0001")
///     .status("flying")
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: String,
    serial_number: String,
    status: String,
    battery_level: i32,
    position: Option<(f64, f64, f64)>,
    max_flight_time: i32,
    max_speed: f64,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Drone {id}"` where id is auto-incremented
    /// - model: `"Quad X4"`
    /// - serial_number: `"SN-{id}"`
    /// - status: `"idle"`
    /// - battery_level: `100`
    /// - position: `None`
    /// - max_flight_time: `30`
    /// - max_speed: `15.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DroneFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Drone {}", id),
            model: "Quad X4".to_string(),
            serial_number: format!("SN-{}", id),
            status: "idle".to_string(),
            battery_level: 100,
            position: None,
            max_flight_time: 30,
            max_speed: 15.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    /// Sets the stored status string.
    ///
    /// The value is written verbatim, which lets tests seed rows the domain layer
    /// would reject.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn battery_level(mut self, battery_level: i32) -> Self {
        self.battery_level = battery_level;
        self
    }

    pub fn position(mut self, latitude: f64, longitude: f64, altitude: f64) -> Self {
        self.position = Some((latitude, longitude, altitude));
        self
    }

    pub fn max_flight_time(mut self, minutes: i32) -> Self {
        self.max_flight_time = minutes;
        self
    }

    /// Builds and inserts the drone entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drone::Model)` - Created drone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        let now = Utc::now();
        entity::drone::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            serial_number: ActiveValue::Set(self.serial_number),
            status: ActiveValue::Set(self.status),
            battery_level: ActiveValue::Set(self.battery_level),
            current_latitude: ActiveValue::Set(self.position.map(|p| p.0)),
            current_longitude: ActiveValue::Set(self.position.map(|p| p.1)),
            current_altitude: ActiveValue::Set(self.position.map(|p| p.2)),
            max_flight_time: ActiveValue::Set(self.max_flight_time),
            max_speed: ActiveValue::Set(self.max_speed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone with default values.
///
/// Shorthand for `DroneFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::drone::Model)` - Created drone entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_drone(db: &DatabaseConnection) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db).build().await
}
