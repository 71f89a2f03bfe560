use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000002_create_doctor_table::Doctor,
    m20260601_000003_create_specialization_table::Specialization,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorSpecialization::Table)
                    .if_not_exists()
                    .col(integer(DoctorSpecialization::DoctorId))
                    .col(integer(DoctorSpecialization::SpecializationId))
                    .primary_key(
                        Index::create()
                            .name("pk_doctor_specialization")
                            .col(DoctorSpecialization::DoctorId)
                            .col(DoctorSpecialization::SpecializationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_specialization_doctor_id")
                            .from(
                                DoctorSpecialization::Table,
                                DoctorSpecialization::DoctorId,
                            )
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_specialization_specialization_id")
                            .from(
                                DoctorSpecialization::Table,
                                DoctorSpecialization::SpecializationId,
                            )
                            .to(Specialization::Table, Specialization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorSpecialization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DoctorSpecialization {
    Table,
    DoctorId,
    SpecializationId,
}
