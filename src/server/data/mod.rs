//! Database repository layer and mission-file storage.
//!
//! This module contains the repositories for drones and waypoints plus the file-backed
//! store for raw waypoint files. Repositories use SeaORM entity models internally and
//! return domain models so the service layer never touches entities directly. They are
//! generic over `ConnectionTrait` so services can run several of them on one transaction.

pub mod drone;
pub mod mission_file;
pub mod waypoint;

#[cfg(test)]
mod test;
