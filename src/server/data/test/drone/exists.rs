use super::*;

/// Tests the existence check for present and absent drones.
///
/// Expected: true for the created drone, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    assert!(repo.exists(drone.id).await?);
    assert!(!repo.exists(drone.id + 1).await?);

    Ok(())
}
