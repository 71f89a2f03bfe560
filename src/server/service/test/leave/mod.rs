use crate::server::{
    error::{leave::LeaveError, AppError},
    model::leave::CreateLeaveParams,
    service::leave::LeaveService,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod add_leave;
