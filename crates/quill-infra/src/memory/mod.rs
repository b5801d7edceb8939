//! In-memory repositories - used when no database is configured.
//!
//! Note: Data is lost on process restart.

mod authors;
mod posts;


use std::collections::BTreeMap;

pub use authors::InMemoryAuthorRepository;
pub use posts::InMemoryPostRepository;

/// Rows keyed by id, with a sequence standing in for `SERIAL`.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}
