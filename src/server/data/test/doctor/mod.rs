use crate::server::{
    data::doctor::DoctorRepository,
    model::doctor::{CreateDoctorParams, UpdateDoctorParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_email;
mod get_all_paginated;
mod get_by_id;
mod update;
