//! Domain entities - the core business objects.
//!
//! Records are only built through validating constructors and changed through
//! validating setters, so a value held in one of these types has already
//! passed its field rules.

mod author;
mod category;
mod post;

pub use author::{Author, NewAuthor};
pub use category::Category;
pub use post::{NewPost, Post};
