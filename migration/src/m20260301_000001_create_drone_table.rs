use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    .col(pk_auto(Drone::Id))
                    .col(string(Drone::Name))
                    .col(string(Drone::Model))
                    .col(string_uniq(Drone::SerialNumber))
                    .col(string(Drone::Status).default("idle"))
                    .col(integer(Drone::BatteryLevel).default(100))
                    .col(double_null(Drone::CurrentLatitude))
                    .col(double_null(Drone::CurrentLongitude))
                    .col(double_null(Drone::CurrentAltitude))
                    .col(integer(Drone::MaxFlightTime).default(30))
                    .col(double(Drone::MaxSpeed).default(15.0))
                    .col(
                        timestamp(Drone::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Drone::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Drone {
    Table,
    Id,
    Name,
    Model,
    SerialNumber,
    Status,
    BatteryLevel,
    CurrentLatitude,
    CurrentLongitude,
    CurrentAltitude,
    MaxFlightTime,
    MaxSpeed,
    CreatedAt,
    UpdatedAt,
}
