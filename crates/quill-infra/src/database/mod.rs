//! Database connection management and SeaORM repositories.

mod connections;

#[cfg(feature = "postgres")]
mod errors;
#[cfg(feature = "postgres")]
mod sea_base;
#[cfg(feature = "postgres")]
pub mod sea_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "postgres")]
pub use sea_repo::{SeaAuthorRepository, SeaPostRepository};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
