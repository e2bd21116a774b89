use crate::server::{
    error::{not_found::NotFoundError, validation::ValidationError, AppError},
    model::drone::{
        CreateDroneParam, DroneStatus, Position, TransitionPolicy, UpdateDroneParam,
    },
    service::drone::DroneService,
    util::lock::DroneLocks,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
