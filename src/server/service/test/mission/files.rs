use super::*;

/// Tests listing the files offered for loading.
///
/// Expected: Ok with uploaded waypoint files sorted by name, other files ignored
#[tokio::test]
async fn lists_uploaded_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempdir().unwrap();
    let files = MissionFileStore::new(dir.path());
    let locks = DroneLocks::new();

    let drone = factory::create_drone(db).await?;
    let content = mission::three_waypoints();
    files.write("readme.txt", b"ignored").await?;

    let service = MissionService::new(db, &locks, &files, ParseMode::Lenient);
    service
        .upload(drone.id, "zulu.waypoints", Some(content.as_bytes()))
        .await?;
    service
        .upload(drone.id, "alpha.waypoints", Some(content.as_bytes()))
        .await?;

    let available = service.available_files().await?;

    let names: Vec<&str> = available.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["alpha.waypoints", "zulu.waypoints"]);
    assert!(available
        .iter()
        .all(|f| f.size == content.len() as u64));

    Ok(())
}
