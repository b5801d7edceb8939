use async_trait::async_trait;

use crate::domain::{Author, Category, NewAuthor, NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Overwrite an existing entity. Returns [`RepoError::NotFound`] if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository.
///
/// Implementations must reject a second author with an existing name with
/// [`RepoError::Constraint`], on both insert and update.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i32> {
    /// Store a new author; storage assigns the id and creation time.
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError>;

    /// Find an author by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Store a new post; storage assigns the id and creation time.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
