use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "specialization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doctor_specialization::Entity")]
    DoctorSpecialization,
}

impl Related<super::doctor_specialization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorSpecialization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
