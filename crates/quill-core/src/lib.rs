//! # Quill Core
//!
//! The domain layer of Quill: authors, posts and the rules a record must
//! satisfy before it is written.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validate;

pub use error::{DomainError, RepoError, ValidationError};
pub use services::{AuthorChanges, AuthorService, PostChanges, PostService};
