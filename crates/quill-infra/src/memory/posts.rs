use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::RepoError;
use quill_core::domain::{Category, NewPost, Post};
use quill_core::ports::{BaseRepository, PostRepository};

use super::Table;

/// In-memory post store.
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&post.id()).ok_or(RepoError::NotFound)?;
        *row = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let stored = Post::from_new(id, post, Utc::now());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect())
    }
}
