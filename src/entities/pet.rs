use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "pets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<DateTime>,
    pub weight: Option<f64>,
    pub color: Option<String>,
    pub microchip_id: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::vet_visit::Entity")]
    VetVisit,
    #[sea_orm(has_many = "super::medication::Entity")]
    Medication,
    #[sea_orm(has_many = "super::feeding_schedule::Entity")]
    FeedingSchedule,
    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
    #[sea_orm(has_many = "super::health_record::Entity")]
    HealthRecord,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vet_visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VetVisit.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medication.def()
    }
}

impl Related<super::feeding_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedingSchedule.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl Related<super::health_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
