use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::RepoError;
use quill_core::domain::{Author, NewAuthor};
use quill_core::ports::{AuthorRepository, BaseRepository};

use super::Table;

/// In-memory author store.
///
/// The name check and the write happen under one write lock, which gives the
/// same guarantee as the unique index on `authors.name`.
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn name_taken(table: &Table<Author>, name: &str, except: Option<i32>) -> bool {
    table
        .rows
        .values()
        .any(|a| a.name() == name && Some(a.id()) != except)
}

#[async_trait]
impl BaseRepository<Author, i32> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, author: Author) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;

        if name_taken(&table, author.name(), Some(author.id())) {
            return Err(RepoError::Constraint("authors.name".to_string()));
        }

        let row = table.rows.get_mut(&author.id()).ok_or(RepoError::NotFound)?;
        *row = author.clone();
        Ok(author)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;

        if name_taken(&table, author.name(), None) {
            return Err(RepoError::Constraint("authors.name".to_string()));
        }

        let id = table.next_id();
        let stored = Author::from_new(id, author, Utc::now());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.name() == name).cloned())
    }
}
