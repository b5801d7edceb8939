//! Test doubles for failure paths the in-memory stores in `quill-infra`
//! cannot produce.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Author, Category, NewAuthor, NewPost, Post};
use crate::error::RepoError;
use crate::ports::{AuthorRepository, BaseRepository, PostRepository};

/// Never finds an author by name, as if every lookup lost a race with a
/// concurrent insert. Inserts still enforce the unique name.
#[derive(Default)]
pub struct BlindAuthors(Mutex<Vec<Author>>);

#[async_trait]
impl BaseRepository<Author, i32> for BlindAuthors {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.0.lock().unwrap().iter().find(|a| a.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn update(&self, _author: Author) -> Result<Author, RepoError> {
        unimplemented!()
    }

    async fn delete(&self, _id: i32) -> Result<(), RepoError> {
        unimplemented!()
    }
}

#[async_trait]
impl AuthorRepository for BlindAuthors {
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError> {
        let mut rows = self.0.lock().unwrap();
        if rows.iter().any(|a| a.name() == author.name()) {
            return Err(RepoError::Constraint("authors_name_key".into()));
        }
        let stored = Author::from_new(rows.len() as i32 + 1, author, Utc::now());
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Author>, RepoError> {
        Ok(None)
    }
}

/// Every call fails as if the tables had not been created.
pub struct UnavailableStore;

fn missing() -> RepoError {
    RepoError::Unavailable("relation does not exist".into())
}

#[async_trait]
impl<T: Send + 'static> BaseRepository<T, i32> for UnavailableStore {
    async fn find_by_id(&self, _id: i32) -> Result<Option<T>, RepoError> {
        Err(missing())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Err(missing())
    }

    async fn update(&self, _entity: T) -> Result<T, RepoError> {
        Err(missing())
    }

    async fn delete(&self, _id: i32) -> Result<(), RepoError> {
        Err(missing())
    }
}

#[async_trait]
impl AuthorRepository for UnavailableStore {
    async fn insert(&self, _author: NewAuthor) -> Result<Author, RepoError> {
        Err(missing())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Author>, RepoError> {
        Err(missing())
    }
}

#[async_trait]
impl PostRepository for UnavailableStore {
    async fn insert(&self, _post: NewPost) -> Result<Post, RepoError> {
        Err(missing())
    }

    async fn find_by_category(&self, _category: Category) -> Result<Vec<Post>, RepoError> {
        Err(missing())
    }
}
