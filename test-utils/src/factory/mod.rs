//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through the entity models so
//! tests can arrange database state without going through the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let drone = factory::drone::create_drone(&db).await?;
//!
//!     // Create a drone that already flies a three-waypoint mission
//!     let (drone, waypoints) = factory::helpers::create_drone_with_mission(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let drone = factory::drone::DroneFactory::new(&db)
//!     .name("Survey One")
//!     .status("charging")
//!     .battery_level(42)
//!     .build()
//!     .await?;
//! ```

pub mod drone;
pub mod helpers;
pub mod waypoint;

// Re-export commonly used factory functions for concise usage
pub use drone::create_drone;
pub use waypoint::create_waypoint;
