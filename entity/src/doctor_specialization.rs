use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor_specialization")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub doctor_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub specialization_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::specialization::Entity",
        from = "Column::SpecializationId",
        to = "super::specialization::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Specialization,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::specialization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specialization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
