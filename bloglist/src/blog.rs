use serde::{Serialize, Deserialize};
use serde_json::Value;
use core::fmt::{Display, Formatter};

/// Metadata of one blog post as it is listed by the blog API
/// Only author and likes take part in aggregation, other fields are carried along untouched
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BlogRecord
{
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub likes: u32,
    // Owning user, either an id or the populated user document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>
}

impl BlogRecord
{
    pub fn new(author: impl Into<String>, likes: u32) -> Self
    {
        return Self { id: None, title: None, author: author.into(), url: None, likes, user: None };
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self
    {
        self.title = Some(title.into());
        self
    }
}

impl Display for BlogRecord
{
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result
    {
        match &self.title
        {
            Some(title) => write!(f, "{} by {} ({} likes)", title, self.author, self.likes),
            None => write!(f, "{} ({} likes)", self.author, self.likes)
        }
    }
}

/// Number of blogs written by an author
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthorBlogCount
{
    pub author: String,
    pub blogs: usize
}

/// Sum of likes over all blogs of an author
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthorLikeTotal
{
    pub author: String,
    pub likes: u64
}

impl Display for AuthorBlogCount
{
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result
    {
        write!(f, "{} ({} blogs)", self.author, self.blogs)
    }
}

impl Display for AuthorLikeTotal
{
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result
    {
        write!(f, "{} ({} likes)", self.author, self.likes)
    }
}
