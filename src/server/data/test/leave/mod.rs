use crate::server::data::leave::LeaveRepository;
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_many;
mod get_by_doctor;
