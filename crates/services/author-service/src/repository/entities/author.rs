//! Author database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Author;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_authorised: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author {
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            is_authorised: model.is_authorised,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Full active model for an upsert of the domain entity
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        ActiveModel {
            email: Set(author.email),
            name: Set(author.name),
            password_hash: Set(author.password_hash),
            is_authorised: Set(author.is_authorised),
            created_at: Set(author.created_at),
            updated_at: Set(author.updated_at),
        }
    }
}
