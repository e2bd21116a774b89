use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_drone_table::Drone;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Waypoint::Table)
                    .if_not_exists()
                    .col(pk_auto(Waypoint::Id))
                    .col(integer(Waypoint::DroneId))
                    .col(integer(Waypoint::SequenceNumber))
                    .col(integer(Waypoint::Command))
                    .col(double(Waypoint::Param1))
                    .col(double(Waypoint::Param2))
                    .col(double(Waypoint::Param3))
                    .col(double(Waypoint::Param4))
                    .col(double(Waypoint::Latitude))
                    .col(double(Waypoint::Longitude))
                    .col(double(Waypoint::Altitude))
                    .col(boolean(Waypoint::AutoContinue))
                    .col(string(Waypoint::SourceFile))
                    .col(
                        timestamp(Waypoint::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waypoint_drone_id")
                            .from(Waypoint::Table, Waypoint::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per mission slot; replace deletes the old set before inserting.
        manager
            .create_index(
                Index::create()
                    .name("idx_waypoint_drone_sequence")
                    .table(Waypoint::Table)
                    .col(Waypoint::DroneId)
                    .col(Waypoint::SequenceNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Waypoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Waypoint {
    Table,
    Id,
    DroneId,
    SequenceNumber,
    Command,
    Param1,
    Param2,
    Param3,
    Param4,
    Latitude,
    Longitude,
    Altitude,
    AutoContinue,
    SourceFile,
    CreatedAt,
}
