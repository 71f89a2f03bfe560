use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
