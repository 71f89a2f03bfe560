use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000001_create_client_table::Client, m20260601_000002_create_doctor_table::Doctor,
    m20260602_000006_create_type_of_visit_table::TypeOfVisit,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visit::Table)
                    .if_not_exists()
                    .col(pk_auto(Visit::Id))
                    .col(integer(Visit::ClientId))
                    .col(integer(Visit::DoctorId))
                    .col(integer(Visit::TypeOfVisitId))
                    .col(timestamp(Visit::VisitTime))
                    .col(
                        timestamp(Visit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_client_id")
                            .from(Visit::Table, Visit::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_doctor_id")
                            .from(Visit::Table, Visit::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_type_of_visit_id")
                            .from(Visit::Table, Visit::TypeOfVisitId)
                            .to(TypeOfVisit::Table, TypeOfVisit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Visit {
    Table,
    Id,
    ClientId,
    DoctorId,
    TypeOfVisitId,
    VisitTime,
    CreatedAt,
}
