//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::RepoError;
use quill_core::domain::Author;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl TryFrom<Model> for Author {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Author::from_storage(
            model.id,
            model.name,
            model.phone_number,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        ))
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        Self {
            id: Set(author.id()),
            name: Set(author.name().to_owned()),
            phone_number: Set(author.phone_number().map(str::to_owned)),
            created_at: Set(author.created_at().into()),
            updated_at: Set(author.updated_at().map(Into::into)),
        }
    }
}
