use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    #[sea_orm(unique)]
    pub serial_number: String,
    /// Lowercase status name, one of `idle`, `flying`, `landing`, `charging`,
    /// `maintenance` or `error`.
    pub status: String,
    pub battery_level: i32,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub current_altitude: Option<f64>,
    /// Minutes
    pub max_flight_time: i32,
    pub max_speed: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::waypoint::Entity")]
    Waypoint,
}

impl Related<super::waypoint::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Waypoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
