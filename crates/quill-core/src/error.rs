//! Domain-level error types.

use thiserror::Error;

/// A single field rule that a candidate value broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Author must have a name")]
    MissingName,

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhoneNumber,

    #[error("Post must have a title")]
    MissingTitle,

    #[error("Post title must be sufficiently clickbait-y")]
    NotClickbait,

    #[error("Post content must be at least 250 characters")]
    ContentTooShort,

    #[error("Post summary must be 250 characters or fewer")]
    SummaryTooLong,

    #[error("Post category must be 'Fiction' or 'Non-Fiction'")]
    InvalidCategory,
}

impl ValidationError {
    /// Name of the column the rejected value was meant for.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::InvalidPhoneNumber => "phone_number",
            ValidationError::MissingTitle | ValidationError::NotClickbait => "title",
            ValidationError::ContentTooShort => "content",
            ValidationError::SummaryTooLong => "summary",
            ValidationError::InvalidCategory => "category",
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Translate a repository failure that has no entity-specific meaning.
    pub(crate) fn from_repo(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) | RepoError::Unavailable(msg) => {
                DomainError::StorageUnavailable(msg)
            }
            RepoError::Constraint(msg) => DomainError::Duplicate(msg),
            RepoError::Query(msg) => DomainError::Internal(msg),
            RepoError::NotFound => DomainError::Internal("Record vanished during write".into()),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The backing table is missing, typically because migrations have not run.
    #[error("Storage not initialized: {0}")]
    Unavailable(String),
}
