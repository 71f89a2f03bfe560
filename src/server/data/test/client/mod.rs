use crate::server::{
    data::client::ClientRepository,
    model::client::{CreateClientParams, UpdateClientParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
