//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::RepoError;
use quill_core::domain::{Category, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub summary: Option<String>,
    pub category: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post. Fails on a category the
/// domain does not know.
impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category: Category = model.category.parse().map_err(|_| {
            RepoError::Query(format!(
                "post {} has unknown category {:?}",
                model.id, model.category
            ))
        })?;

        Ok(Post::from_storage(
            model.id,
            model.title,
            model.content,
            model.summary,
            category,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        ))
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id()),
            title: Set(post.title().to_owned()),
            content: Set(post.content().to_owned()),
            summary: Set(post.summary().map(str::to_owned)),
            category: Set(post.category().as_str().to_owned()),
            created_at: Set(post.created_at().into()),
            updated_at: Set(post.updated_at().map(Into::into)),
        }
    }
}
