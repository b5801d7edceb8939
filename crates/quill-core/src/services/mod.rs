//! Services - the write path for records.
//!
//! Services own the checks a single field cannot make on its own (author
//! name uniqueness), stamp modification times and map repository failures
//! into [`crate::DomainError`].

mod authors;
mod posts;

#[cfg(test)]
mod fakes;

pub use authors::{AuthorChanges, AuthorService};
pub use posts::{PostChanges, PostService};
