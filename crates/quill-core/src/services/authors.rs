use std::sync::Arc;

use crate::domain::{Author, NewAuthor};
use crate::error::{DomainError, RepoError};
use crate::ports::AuthorRepository;

const DUPLICATE_NAME: &str = "Author name must be unique";

/// A partial update. `None` leaves a field as it is; for `phone_number`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
}

/// Creates, changes and removes authors.
#[derive(Clone)]
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// Store a new author.
    ///
    /// The name lookup rejects most duplicates early. Storage has the final
    /// say: a unique violation on insert is reported as the same duplicate.
    pub async fn create(&self, author: NewAuthor) -> Result<Author, DomainError> {
        self.ensure_name_available(author.name(), None).await?;

        let created = self.repo.insert(author).await.map_err(duplicate_or_repo)?;
        tracing::info!(author_id = created.id(), "Author created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<Author, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::from_repo)?
            .ok_or(DomainError::NotFound {
                entity_type: "Author",
                id,
            })
    }

    pub async fn list(&self) -> Result<Vec<Author>, DomainError> {
        self.repo.find_all().await.map_err(DomainError::from_repo)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Author>, DomainError> {
        self.repo
            .find_by_name(name)
            .await
            .map_err(DomainError::from_repo)
    }

    /// Apply `changes` to a stored author. The first failing field aborts the
    /// update and nothing is written.
    pub async fn update(&self, id: i32, changes: AuthorChanges) -> Result<Author, DomainError> {
        let mut author = self.get(id).await?;

        if let Some(name) = changes.name {
            author.set_name(name)?;
            self.ensure_name_available(author.name(), Some(id)).await?;
        }
        if let Some(phone_number) = changes.phone_number {
            author.set_phone_number(phone_number)?;
        }
        author.touch();

        let updated = self.repo.update(author).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Author",
                id,
            },
            other => duplicate_or_repo(other),
        })?;
        tracing::info!(author_id = id, "Author updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Author",
                id,
            },
            other => DomainError::from_repo(other),
        })?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }

    /// Early duplicate check. `current` is the id of the author being renamed,
    /// which may keep its own name.
    async fn ensure_name_available(&self, name: &str, current: Option<i32>) -> Result<(), DomainError> {
        let existing = self.repo.find_by_name(name).await.map_err(|e| {
            tracing::warn!(error = %e, "Author name lookup failed");
            DomainError::from_repo(e)
        })?;

        match existing {
            Some(other) if Some(other.id()) != current => {
                tracing::debug!(existing_id = other.id(), "Author name already taken");
                Err(DomainError::Duplicate(DUPLICATE_NAME.to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn duplicate_or_repo(err: RepoError) -> DomainError {
    match err {
        RepoError::Constraint(detail) => {
            tracing::debug!(%detail, "Author name rejected by storage constraint");
            DomainError::Duplicate(DUPLICATE_NAME.to_string())
        }
        other => DomainError::from_repo(other),
    }
}
