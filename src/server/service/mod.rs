//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Registry defaults, status transition policy, not-found handling
//! - **Orchestration**: Coordinating the parser, mission-file store and repositories
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Per-drone locking and atomic multi-row writes

pub mod drone;
pub mod mission;

#[cfg(test)]
mod test;
