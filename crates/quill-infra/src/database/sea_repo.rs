//! SeaORM repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use quill_core::RepoError;
use quill_core::domain::{Author, Category, NewAuthor, NewPost, Post};
use quill_core::ports::{AuthorRepository, PostRepository};

use super::entity::authors::{self, Entity as AuthorEntity};
use super::entity::posts::{self, Entity as PostEntity};
use super::errors::map_db_err;
use super::sea_base::SeaRepository;

/// SeaORM author repository. Name uniqueness rests on the `authors.name`
/// unique index.
pub type SeaAuthorRepository = SeaRepository<AuthorEntity>;

/// SeaORM post repository.
pub type SeaPostRepository = SeaRepository<PostEntity>;

#[async_trait]
impl AuthorRepository for SeaAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError> {
        let model = authors::ActiveModel {
            id: NotSet,
            name: Set(author.name().to_owned()),
            phone_number: Set(author.phone_number().map(str::to_owned)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(author_id = model.id, "Inserted author row");
        Author::try_from(model)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        AuthorEntity::find()
            .filter(authors::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Author::try_from)
            .transpose()
    }
}

#[async_trait]
impl PostRepository for SeaPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = posts::ActiveModel {
            id: NotSet,
            title: Set(post.title().to_owned()),
            content: Set(post.content().to_owned()),
            summary: Set(post.summary().map(str::to_owned)),
            category: Set(post.category().as_str().to_owned()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Inserted post row");
        Post::try_from(model)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        PostEntity::find()
            .filter(posts::Column::Category.eq(category.as_str()))
            .order_by_asc(posts::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Post::try_from)
            .collect()
    }
}
