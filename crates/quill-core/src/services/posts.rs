use std::sync::Arc;

use crate::domain::{Category, NewPost, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// A partial update. `None` leaves a field as it is; for `summary`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub category: Option<String>,
}

/// Creates, changes and removes posts.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let created = self
            .repo
            .insert(post)
            .await
            .map_err(DomainError::from_repo)?;
        tracing::info!(post_id = created.id(), category = %created.category(), "Post created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::from_repo)?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// All posts, or only those in `category`.
    pub async fn list(&self, category: Option<Category>) -> Result<Vec<Post>, DomainError> {
        let result = match category {
            Some(category) => self.repo.find_by_category(category).await,
            None => self.repo.find_all().await,
        };
        result.map_err(DomainError::from_repo)
    }

    /// Apply `changes` to a stored post. The first failing field aborts the
    /// update and nothing is written.
    pub async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;

        if let Some(title) = changes.title {
            post.set_title(title)?;
        }
        if let Some(content) = changes.content {
            post.set_content(content)?;
        }
        if let Some(summary) = changes.summary {
            post.set_summary(summary)?;
        }
        if let Some(category) = changes.category {
            post.set_category(&category)?;
        }
        post.touch();

        let updated = self.repo.update(post).await.map_err(|e| not_found_or(e, id))?;
        tracing::info!(post_id = id, "Post updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| not_found_or(e, id))?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

fn not_found_or(err: RepoError, id: i32) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: "Post",
            id,
        },
        other => DomainError::from_repo(other),
    }
}
