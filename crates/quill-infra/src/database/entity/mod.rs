//! SeaORM entities. Table layouts match the `migration` crate.

pub mod authors;
pub mod posts;
