use crate::server::{
    data::specialization::SpecializationRepository,
    model::specialization::{CreateSpecializationParams, UpdateSpecializationParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_name;
mod get_all;
mod get_by_id;
mod update;
