//! Statistics over a list of blogs
//!
//! The functions in `list_helper` are pure: they borrow the whole list, never modify it,
//! and compute a single value or a small summary record from it.
//! Loading and validating the list is done separately by `loader`.

pub mod blog;
pub mod error;
pub mod loader;
pub mod list_helper;
mod author_table;

pub mod prelude
{
    pub use crate::blog::{BlogRecord, AuthorBlogCount, AuthorLikeTotal};
    pub use crate::error::{BlogListError, Result};
    pub use crate::loader::{load_blogs, load_blogs_from_file};
    pub use crate::list_helper::{total_likes, favorite_blog, most_blogs, most_likes};
}
