use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000001_create_client_table::Client, m20260601_000002_create_doctor_table::Doctor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::ClientId))
                    .col(integer(Review::DoctorId))
                    .col(integer(Review::Rating))
                    .col(text_null(Review::Comment))
                    .col(
                        timestamp(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_client_id")
                            .from(Review::Table, Review::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_doctor_id")
                            .from(Review::Table, Review::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    ClientId,
    DoctorId,
    Rating,
    Comment,
    CreatedAt,
}
