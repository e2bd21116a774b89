//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a drone together with a dense mission of `count` waypoints.
///
/// Waypoints are numbered `0..count` and placed one hundredth of a degree apart
/// along the equator so path lengths are predictable.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of waypoints to create
///
/// # Returns
/// - `Ok((drone, waypoints))` - Created drone and its waypoints in sequence order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_drone_with_mission(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::drone::Model, Vec<entity::waypoint::Model>), DbErr> {
    let drone = crate::factory::drone::create_drone(db).await?;

    let mut waypoints = Vec::with_capacity(count.max(0) as usize);
    for sequence_number in 0..count {
        let waypoint = crate::factory::waypoint::WaypointFactory::new(db, drone.id)
            .sequence_number(sequence_number)
            .position(0.0, sequence_number as f64 * 0.01, 50.0)
            .build()
            .await?;
        waypoints.push(waypoint);
    }

    Ok((drone, waypoints))
}
