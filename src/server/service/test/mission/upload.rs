use super::*;

/// Tests uploading a valid waypoint file.
///
/// Verifies that the file is saved, parsed and becomes the drone's mission.
///
/// Expected: Ok with three waypoints numbered 0..3
#[tokio::test]
async fn stores_file_and_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;
    let content = mission::three_waypoints();

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let load = service
        .upload(drone.id, "survey.waypoints", Some(content.as_bytes()))
        .await?;

    assert_eq!(load.drone_id, drone.id);
    assert_eq!(load.filename, "survey.waypoints");
    assert_eq!(load.format_version, "110");
    assert_eq!(load.waypoint_count(), 3);
    let sequence: Vec<i32> = load.waypoints.iter().map(|w| w.sequence_number).collect();
    assert_eq!(sequence, vec![0, 1, 2]);
    assert!((load.total_distance - 2.0 * 111_195.0).abs() < 2.0 * 1_112.0);

    assert_eq!(
        files.read("survey.waypoints").await?,
        Some(content.into_bytes())
    );
    assert_eq!(service.list(drone.id).await?.len(), 3);

    Ok(())
}

/// Tests an upload whose content did not arrive.
///
/// Expected: Err(AppError::Upload) and nothing written
#[tokio::test]
async fn rejects_missing_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);

    assert!(matches!(
        service.upload(drone.id, "a.waypoints", None).await,
        Err(AppError::Upload(_))
    ));
    assert!(matches!(
        service.upload(drone.id, "a.waypoints", Some(b"")).await,
        Err(AppError::Upload(_))
    ));
    assert!(!files.exists("a.waypoints").await?);

    Ok(())
}

/// Tests that a rejected file is still saved and the old mission kept.
///
/// Expected: Err(MissionFormatError::BadHeader), raw file on disk, mission unchanged
#[tokio::test]
async fn bad_header_keeps_file_and_mission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let (drone, _) = factory::helpers::create_drone_with_mission(db, 4).await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let result = service
        .upload(drone.id, "broken.waypoints", Some(b"not a mission\n"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::FormatErr(MissionFormatError::BadHeader))
    ));
    assert!(files.exists("broken.waypoints").await?);
    assert_eq!(service.list(drone.id).await?.len(), 4);

    Ok(())
}

/// Tests that strict parsing rejects a file the lenient parser would accept.
///
/// Expected: Err(MissionFormatError::MalformedLine) and mission unchanged
#[tokio::test]
async fn strict_mode_rejects_short_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let (drone, _) = factory::helpers::create_drone_with_mission(db, 2).await?;
    let content = mission::with_short_line();

    let strict = MissionService::new(db, &locks, &files, ParseMode::Strict);
    let result = strict
        .upload(drone.id, "short.waypoints", Some(content.as_bytes()))
        .await;
    assert!(matches!(
        result,
        Err(AppError::FormatErr(MissionFormatError::MalformedLine { .. }))
    ));
    assert_eq!(strict.list(drone.id).await?.len(), 2);

    let lenient = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let load = lenient
        .upload(drone.id, "short.waypoints", Some(content.as_bytes()))
        .await?;
    assert_eq!(load.waypoint_count(), 2);

    Ok(())
}

/// Tests uploading for an unknown drone.
///
/// Expected: Err(NotFoundError::Drone) and no file written
#[tokio::test]
async fn fails_for_unknown_drone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let content = mission::three_waypoints();

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let result = service
        .upload(31, "orphan.waypoints", Some(content.as_bytes()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFoundErr(NotFoundError::Drone(31)))
    ));
    assert!(!files.exists("orphan.waypoints").await?);

    Ok(())
}

/// Tests uploading under a name that would leave the store.
///
/// Expected: Err(ValidationError::InvalidFileName)
#[tokio::test]
async fn rejects_path_traversal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path().join("missions"));
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;
    let content = mission::three_waypoints();

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let result = service
        .upload(drone.id, "../escape.waypoints", Some(content.as_bytes()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidFileName(_)))
    ));
    assert!(!dir.path().join("escape.waypoints").exists());

    Ok(())
}

/// Tests an upload whose full-length lines carry a decimal command and a `nan` altitude.
///
/// Verifies that the lenient parser keeps every line and nothing reaches the database
/// as a non-finite value.
///
/// Expected: Ok with two waypoints, the `nan` altitude stored as 0
#[tokio::test]
async fn keeps_full_length_lines_with_odd_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;
    let content = mission::file(&[
        "0\t0\t3\t16.0\t0\t0\t0\t0\t47.0\t8.0\t50\t1".to_string(),
        "1\t0\t3\t16\t0\t0\t0\t0\t47.1\t8.1\tnan\t1".to_string(),
    ]);

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    let load = service
        .upload(drone.id, "odd.waypoints", Some(content.as_bytes()))
        .await?;

    assert_eq!(load.waypoint_count(), 2);
    let stored = service.list(drone.id).await?;
    assert_eq!(stored[0].command, 16);
    assert_eq!(stored[1].altitude, 0.0);

    let strict = MissionService::new(db, &locks, &files, ParseMode::Strict);
    let result = strict
        .upload(drone.id, "odd.waypoints", Some(content.as_bytes()))
        .await;
    assert!(matches!(
        result,
        Err(AppError::FormatErr(MissionFormatError::InvalidField { line: 3, .. }))
    ));
    assert_eq!(strict.list(drone.id).await?.len(), 2);

    Ok(())
}
