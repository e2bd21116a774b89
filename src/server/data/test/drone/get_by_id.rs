use super::*;

/// Tests getting an existing drone.
///
/// Expected: Ok(Some) with the stored drone
#[tokio::test]
async fn returns_existing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::DroneFactory::new(db)
        .status("charging")
        .battery_level(42)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let drone = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(drone.id, created.id);
    assert_eq!(drone.status, DroneStatus::Charging);
    assert_eq!(drone.battery_level, 42);

    Ok(())
}

/// Tests getting a drone that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}

/// Tests reading a row whose stored status is outside the closed set.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_corrupt_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::DroneFactory::new(db)
        .status("hovering")
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let result = repo.get_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
