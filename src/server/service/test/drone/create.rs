use super::*;
use crate::model::drone::CreateDroneDto;

/// Tests registering a drone with only the required fields.
///
/// Verifies that defaults are applied and the summary starts without a mission.
///
/// Expected: Ok with status idle and battery 100
#[tokio::test]
async fn creates_drone_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLocks::new();

    let param = CreateDroneParam::from_dto(CreateDroneDto {
        name: Some("Survey One".to_string()),
        model: Some("Quad X4".to_string()),
        serial_number: Some("SN-SURVEY-1".to_string()),
        ..Default::default()
    })?;

    let service = DroneService::new(db, &locks, TransitionPolicy::Permissive);
    let summary = service.create(param).await?;

    assert_eq!(summary.drone.status, DroneStatus::Idle);
    assert_eq!(summary.drone.battery_level, 100);
    assert_eq!(summary.waypoint_count, 0);
    assert!(summary.last_waypoint_update.is_none());

    Ok(())
}

/// Tests registering a drone without a serial number.
///
/// Expected: Err(ValidationError::MissingRequiredField) before any write
#[tokio::test]
async fn rejects_missing_serial_number() -> Result<(), AppError> {
    let result = CreateDroneParam::from_dto(CreateDroneDto {
        name: Some("Survey One".to_string()),
        model: Some("Quad X4".to_string()),
        ..Default::default()
    });

    assert_eq!(
        result,
        Err(ValidationError::MissingRequiredField("serial_number"))
    );

    Ok(())
}

/// Tests registering two drones with the same serial number.
///
/// Expected: Err(AppError::DbErr) from the unique constraint
#[tokio::test]
async fn duplicate_serial_number_is_a_storage_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLocks::new();

    let existing = factory::create_drone(db).await?;
    let param = CreateDroneParam::from_dto(CreateDroneDto {
        name: Some("Copy".to_string()),
        model: Some("Quad X4".to_string()),
        serial_number: Some(existing.serial_number),
        ..Default::default()
    })?;

    let service = DroneService::new(db, &locks, TransitionPolicy::Permissive);
    let result = service.create(param).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
