//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Customer, CustomerId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kana: Option<String>,
    pub phone_number: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            name: model.name,
            kana: model.kana,
            phone_number: model.phone_number,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
