use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub doctor_id: i32,
    pub type_of_visit_id: i32,
    pub visit_time: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::type_of_visit::Entity",
        from = "Column::TypeOfVisitId",
        to = "super::type_of_visit::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TypeOfVisit,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::type_of_visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeOfVisit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
