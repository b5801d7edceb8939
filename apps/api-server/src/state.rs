//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::{AuthorService, PostService};
use quill_infra::database::DatabaseConnections;
use quill_infra::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::database::DatabaseConfig;
#[cfg(feature = "postgres")]
use quill_infra::{SeaAuthorRepository, SeaPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorService,
    pub posts: PostService,
    /// Present when records are stored in a database.
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// State backed by in-memory repositories.
    pub fn in_memory() -> Self {
        tracing::warn!("Using in-memory repositories - data is lost on restart");

        Self {
            authors: AuthorService::new(Arc::new(InMemoryAuthorRepository::new())),
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            db: None,
        }
    }

    /// State backed by the configured database.
    #[cfg(feature = "postgres")]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sea_orm::DbErr> {
        let connections = Arc::new(DatabaseConnections::init(config).await?);
        let conn = connections.main.clone();

        tracing::info!("Application state initialized with database storage");

        Ok(Self {
            authors: AuthorService::new(Arc::new(SeaAuthorRepository::new(conn.clone()))),
            posts: PostService::new(Arc::new(SeaPostRepository::new(conn))),
            db: Some(connections),
        })
    }

    pub fn storage_kind(&self) -> &'static str {
        if self.db.is_some() { "database" } else { "memory" }
    }
}
