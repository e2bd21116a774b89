use super::*;

/// Tests finding the most recent waypoint creation time.
///
/// Expected: Ok(Some) with the newest timestamp
#[tokio::test]
async fn returns_newest_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;
    let newest = Utc::now();
    factory::waypoint::WaypointFactory::new(db, drone.id)
        .sequence_number(0)
        .created_at(newest - Duration::hours(2))
        .build()
        .await?;
    factory::waypoint::WaypointFactory::new(db, drone.id)
        .sequence_number(1)
        .created_at(newest)
        .build()
        .await?;

    let repo = WaypointRepository::new(db);

    assert_eq!(repo.last_created_at(drone.id).await?, Some(newest));

    Ok(())
}

/// Tests a drone without waypoints.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_waypoints() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = WaypointRepository::new(db);

    assert_eq!(repo.last_created_at(drone.id).await?, None);

    Ok(())
}
