use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doctor_specialization::Entity")]
    DoctorSpecialization,
    #[sea_orm(has_many = "super::leave::Entity")]
    Leave,
    #[sea_orm(has_many = "super::type_of_visit::Entity")]
    TypeOfVisit,
    #[sea_orm(has_many = "super::visit::Entity")]
    Visit,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::doctor_specialization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorSpecialization.def()
    }
}

impl Related<super::leave::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leave.def()
    }
}

impl Related<super::type_of_visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeOfVisit.def()
    }
}

impl Related<super::visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visit.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
