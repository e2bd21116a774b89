use super::*;

/// Tests loading a file already in the store.
///
/// Verifies that loading replaces the previous mission entirely.
///
/// Expected: Ok with only the file's waypoints stored
#[tokio::test]
async fn replaces_mission_from_stored_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let (drone, _) = factory::helpers::create_drone_with_mission(db, 6).await?;
    files
        .write("patrol.waypoints", mission::three_waypoints().as_bytes())
        .await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let load = service.load(drone.id, "patrol.waypoints").await?;

    assert_eq!(load.waypoint_count(), 3);
    let stored = service.list(drone.id).await?;
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|w| w.source_file == "patrol.waypoints"));

    Ok(())
}

/// Tests loading a file that does not exist.
///
/// Expected: Err(NotFoundError::MissionFile) and mission unchanged
#[tokio::test]
async fn fails_for_missing_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let (drone, _) = factory::helpers::create_drone_with_mission(db, 2).await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let result = service.load(drone.id, "absent.waypoints").await;

    assert!(matches!(
        result,
        Err(AppError::NotFoundErr(NotFoundError::MissionFile(_)))
    ));
    assert_eq!(service.list(drone.id).await?.len(), 2);

    Ok(())
}

/// Tests loading a header-only file.
///
/// Expected: Ok with an empty mission replacing the old one
#[tokio::test]
async fn header_only_file_clears_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let (drone, _) = factory::helpers::create_drone_with_mission(db, 3).await?;
    files.write("empty.waypoints", b"QGC WPL 110\n").await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let load = service.load(drone.id, "empty.waypoints").await?;

    assert_eq!(load.waypoint_count(), 0);
    assert_eq!(load.total_distance, 0.0);
    assert!(service.list(drone.id).await?.is_empty());

    Ok(())
}

/// Tests loading an empty file.
///
/// Expected: Err(MissionFormatError::EmptyInput)
#[tokio::test]
async fn empty_file_is_a_format_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;
    files.write("blank.waypoints", b"\n\n").await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let result = service.load(drone.id, "blank.waypoints").await;

    assert!(matches!(
        result,
        Err(AppError::FormatErr(MissionFormatError::EmptyInput))
    ));

    Ok(())
}
