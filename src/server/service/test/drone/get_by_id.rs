use super::*;

/// Tests that lookups carry the mission summary.
///
/// Expected: Ok(Some) with waypoint count and last update
#[tokio::test]
async fn includes_mission_summary() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLocks::new();

    let (drone, waypoints) = factory::helpers::create_drone_with_mission(db, 3).await?;
    let newest = waypoints.iter().map(|w| w.created_at).max();

    let service = DroneService::new(db, &locks, TransitionPolicy::Permissive);
    let summary = service.get_by_id(drone.id).await?.unwrap();

    assert_eq!(summary.waypoint_count, 3);
    assert_eq!(summary.last_waypoint_update, newest);

    Ok(())
}

/// Tests listing drones with their summaries.
///
/// Expected: Ok with newest drone first and per-drone counts
#[tokio::test]
async fn lists_summaries_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLocks::new();

    let (older, _) = factory::helpers::create_drone_with_mission(db, 2).await?;
    let newer = factory::create_drone(db).await?;

    let service = DroneService::new(db, &locks, TransitionPolicy::Permissive);
    let summaries = service.get_all().await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].drone.id, newer.id);
    assert_eq!(summaries[0].waypoint_count, 0);
    assert_eq!(summaries[1].drone.id, older.id);
    assert_eq!(summaries[1].waypoint_count, 2);

    Ok(())
}

/// Tests looking up an unknown drone.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_drone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLocks::new();

    let service = DroneService::new(db, &locks, TransitionPolicy::Permissive);

    assert!(service.get_by_id(1).await?.is_none());

    Ok(())
}
