use super::*;

/// Tests mission statistics after an upload.
///
/// Expected: Ok with one file group spanning the uploaded coordinates
#[tokio::test]
async fn summarizes_uploaded_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;
    let content = mission::file(&[
        mission::line(0, 16, 10.0, 20.0, 30.0),
        mission::line(1, 16, 11.0, 21.0, 50.0),
    ]);

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    service
        .upload(drone.id, "box.waypoints", Some(content.as_bytes()))
        .await?;
    let stats = service.statistics(drone.id).await?;

    assert_eq!(stats.total_waypoints, 2);
    assert_eq!(stats.files.len(), 1);
    let file = &stats.files[0];
    assert_eq!(file.source_file, "box.waypoints");
    assert_eq!((file.min_latitude, file.max_latitude), (10.0, 11.0));
    assert_eq!((file.min_longitude, file.max_longitude), (20.0, 21.0));
    assert_eq!(file.avg_altitude, 40.0);

    Ok(())
}

/// Tests flight distance for missions of zero, one and several waypoints.
///
/// Expected: 0.0 for fewer than two waypoints, summed segments otherwise
#[tokio::test]
async fn computes_flight_distance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let empty = factory::create_drone(db).await?;
    let (single, _) = factory::helpers::create_drone_with_mission(db, 1).await?;
    let (path, _) = factory::helpers::create_drone_with_mission(db, 3).await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);

    assert_eq!(service.flight_distance(empty.id).await?.total_distance, 0.0);
    assert_eq!(service.flight_distance(single.id).await?.total_distance, 0.0);

    let distance = service.flight_distance(path.id).await?;
    assert_eq!(distance.waypoint_count, 3);
    assert!((distance.total_distance - 2_223.9).abs() < 22.3);

    Ok(())
}

/// Tests statistics for an unknown drone.
///
/// Expected: Err(NotFoundError::Drone)
#[tokio::test]
async fn fails_for_unknown_drone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);

    assert!(matches!(
        service.statistics(2).await,
        Err(AppError::NotFoundErr(NotFoundError::Drone(2)))
    ));
    assert!(matches!(
        service.flight_distance(2).await,
        Err(AppError::NotFoundErr(NotFoundError::Drone(2)))
    ));

    Ok(())
}
