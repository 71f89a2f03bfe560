pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_client_table;
mod m20260601_000002_create_doctor_table;
mod m20260601_000003_create_specialization_table;
mod m20260601_000004_create_doctor_specialization_table;
mod m20260602_000005_create_leave_table;
mod m20260602_000006_create_type_of_visit_table;
mod m20260603_000007_create_visit_table;
mod m20260603_000008_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_client_table::Migration),
            Box::new(m20260601_000002_create_doctor_table::Migration),
            Box::new(m20260601_000003_create_specialization_table::Migration),
            Box::new(m20260601_000004_create_doctor_specialization_table::Migration),
            Box::new(m20260602_000005_create_leave_table::Migration),
            Box::new(m20260602_000006_create_type_of_visit_table::Migration),
            Box::new(m20260603_000007_create_visit_table::Migration),
            Box::new(m20260603_000008_create_review_table::Migration),
        ]
    }
}
