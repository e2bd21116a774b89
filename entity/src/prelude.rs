pub use super::drone::Entity as Drone;
pub use super::waypoint::Entity as Waypoint;
