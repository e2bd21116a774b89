use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "waypoint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub drone_id: i32,
    /// Zero-based position of the waypoint within the drone's current mission.
    pub sequence_number: i32,
    pub command: i32,
    pub param1: f64,
    pub param2: f64,
    pub param3: f64,
    pub param4: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub auto_continue: bool,
    pub source_file: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drone::Entity",
        from = "Column::DroneId",
        to = "super::drone::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Drone,
}

impl Related<super::drone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
