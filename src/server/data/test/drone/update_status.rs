use super::*;

/// Tests writing a new status.
///
/// Expected: Ok(true) and the status persisted
#[tokio::test]
async fn writes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    assert!(repo.update_status(drone.id, DroneStatus::Flying).await?);

    let stored = entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "flying");

    Ok(())
}

/// Tests writing the status of a missing drone.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);

    assert!(!repo.update_status(7, DroneStatus::Error).await?);

    Ok(())
}
