use super::*;

/// Tests creating a drone.
///
/// Verifies that the repository inserts the drone with the given attributes and sets
/// both timestamps.
///
/// Expected: Ok with the created drone
#[tokio::test]
async fn creates_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let drone = repo.create(create_param("SN-100")).await?;

    assert_eq!(drone.name, "Scout");
    assert_eq!(drone.serial_number, "SN-100");
    assert_eq!(drone.status, DroneStatus::Idle);
    assert_eq!(drone.battery_level, 100);
    assert_eq!(drone.created_at, drone.updated_at);

    let stored = entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "idle");

    Ok(())
}

/// Tests that the stored serial number must be unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_serial_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    repo.create(create_param("SN-DUP")).await?;
    let result = repo.create(create_param("SN-DUP")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests creating a drone with a position.
///
/// Expected: Ok with all three coordinates stored
#[tokio::test]
async fn stores_initial_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let drone = repo
        .create(CreateDroneParam {
            current_latitude: Some(47.39),
            current_longitude: Some(8.54),
            current_altitude: Some(410.0),
            ..create_param("SN-POS")
        })
        .await?;

    assert_eq!(
        drone.position(),
        Some(Position {
            latitude: 47.39,
            longitude: 8.54,
            altitude: 410.0
        })
    );

    Ok(())
}
