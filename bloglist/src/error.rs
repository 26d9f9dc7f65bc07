use std::io;
use thiserror::Error;

// Aggregation cannot fail, only reading and validating the blog list can
pub type Result<T> = std::result::Result<T, BlogListError>;

#[derive(Error, Debug)]
pub enum BlogListError
{
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // A blog document lacks a field the aggregation depends on
    #[error("Malformed blog record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String }
}

impl BlogListError
{
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self
    {
        Self::MalformedRecord { index, reason: reason.into() }
    }
}
