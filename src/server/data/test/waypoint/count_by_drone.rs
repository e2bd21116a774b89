use super::*;

/// Tests counting waypoints per drone.
///
/// Expected: Ok with each drone's own count
#[tokio::test]
async fn counts_per_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_drone_with_mission(db, 4).await?;
    let (second, _) = factory::helpers::create_drone_with_mission(db, 1).await?;
    let empty = factory::create_drone(db).await?;

    let repo = WaypointRepository::new(db);
    assert_eq!(repo.count_by_drone(first.id).await?, 4);
    assert_eq!(repo.count_by_drone(second.id).await?, 1);
    assert_eq!(repo.count_by_drone(empty.id).await?, 0);

    Ok(())
}
