use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000002_create_doctor_table::Doctor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leave::Table)
                    .if_not_exists()
                    .col(pk_auto(Leave::Id))
                    .col(integer(Leave::DoctorId))
                    .col(timestamp(Leave::StartTime))
                    .col(timestamp(Leave::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_doctor_id")
                            .from(Leave::Table, Leave::DoctorId)
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
            .drop_table(Table::drop().table(Leave::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leave {
    Table,
    Id,
    DoctorId,
    StartTime,
    EndTime,
}
