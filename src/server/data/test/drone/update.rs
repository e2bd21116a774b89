use super::*;

/// Tests a partial update.
///
/// Verifies that only the supplied fields change and `updated_at` moves forward.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::DroneFactory::new(db)
        .name("Before")
        .battery_level(80)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let updated = repo
        .update(UpdateDroneParam {
            id: created.id,
            name: Some("After".to_string()),
            status: Some(DroneStatus::Maintenance),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.status, DroneStatus::Maintenance);
    assert_eq!(updated.battery_level, 80);
    assert_eq!(updated.serial_number, created.serial_number);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests an update without any field.
///
/// Expected: Ok(Some) with the record unchanged
#[tokio::test]
async fn empty_update_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let before = repo.get_by_id(created.id).await?.unwrap();
    let after = repo
        .update(UpdateDroneParam {
            id: created.id,
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(after, before);

    Ok(())
}

/// Tests updating a drone that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let result = repo
        .update(UpdateDroneParam {
            id: 42,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
