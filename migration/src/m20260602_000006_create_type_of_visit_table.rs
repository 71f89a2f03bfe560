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
                    .table(TypeOfVisit::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeOfVisit::Id))
                    .col(integer(TypeOfVisit::DoctorId))
                    .col(string(TypeOfVisit::Name))
                    .col(integer(TypeOfVisit::PriceCents))
                    .col(integer(TypeOfVisit::DurationMinutes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_of_visit_doctor_id")
                            .from(TypeOfVisit::Table, TypeOfVisit::DoctorId)
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
            .drop_table(Table::drop().table(TypeOfVisit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TypeOfVisit {
    Table,
    Id,
    DoctorId,
    Name,
    PriceCents,
    DurationMinutes,
}
