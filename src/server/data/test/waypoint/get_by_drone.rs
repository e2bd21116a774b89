use super::*;

/// Tests listing a drone's waypoints.
///
/// Verifies that waypoints come back in sequence order even when inserted out of order.
///
/// Expected: Ok with waypoints sorted by sequence number
#[tokio::test]
async fn returns_waypoints_in_sequence_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;
    for sequence_number in [2, 0, 1] {
        factory::create_waypoint(db, drone.id, sequence_number).await?;
    }

    let repo = WaypointRepository::new(db);
    let waypoints = repo.get_by_drone(drone.id).await?;

    let sequence: Vec<i32> = waypoints.iter().map(|w| w.sequence_number).collect();
    assert_eq!(sequence, vec![0, 1, 2]);

    Ok(())
}

/// Tests that listing is scoped to one drone.
///
/// Expected: Ok with only the requested drone's waypoints
#[tokio::test]
async fn excludes_other_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (drone, _) = factory::helpers::create_drone_with_mission(db, 2).await?;
    factory::helpers::create_drone_with_mission(db, 5).await?;

    let repo = WaypointRepository::new(db);
    let waypoints = repo.get_by_drone(drone.id).await?;

    assert_eq!(waypoints.len(), 2);
    assert!(waypoints.iter().all(|w| w.drone_id == drone.id));

    Ok(())
}

/// Tests listing waypoints of an unknown drone.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaypointRepository::new(db);

    assert!(repo.get_by_drone(404).await?.is_empty());

    Ok(())
}
