//! Post database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Post, PostSummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
    pub author_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            author_id: model.author_id,
        }
    }
}

/// Condensed view used when posts are eager-loaded onto users
impl From<Model> for PostSummary {
    fn from(model: Model) -> Self {
        PostSummary {
            title: model.title,
            created_at: model.created_at,
        }
    }
}
