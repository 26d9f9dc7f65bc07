use std::path::Path;
use log::info;
use serde::Serialize;
use bloglist::prelude::*;

/// All statistics of a blog list in one serializable record
/// Statistics without a value (empty list) are serialized as null
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BlogSummary
{
    pub blog_count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<BlogRecord>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikeTotal>
}

/// Serves statistics over a list of blogs loaded up front
pub struct BlogService
{
    blogs: Vec<BlogRecord>
}

impl BlogService
{
    pub fn new(blogs: Vec<BlogRecord>) -> Self
    {
        Self { blogs }
    }

    /// Create a service from a JSON file of blogs
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self>
    {
        let blogs = load_blogs_from_file(path.as_ref())?;
        info!("Loaded {} blogs from {}", blogs.len(), path.as_ref().display());
        return Ok(Self::new(blogs));
    }

    pub fn get_blogs(&self) -> &[BlogRecord]
    {
        &self.blogs
    }

    pub fn total_likes(&self) -> u64
    {
        total_likes(&self.blogs)
    }

    pub fn favorite_blog(&self) -> Option<&BlogRecord>
    {
        favorite_blog(&self.blogs)
    }

    pub fn most_blogs(&self) -> Option<AuthorBlogCount>
    {
        most_blogs(&self.blogs)
    }

    pub fn most_likes(&self) -> Option<AuthorLikeTotal>
    {
        most_likes(&self.blogs)
    }

    pub fn summary(&self) -> BlogSummary
    {
        BlogSummary {
            blog_count: self.blogs.len(),
            total_likes: self.total_likes(),
            favorite_blog: self.favorite_blog().cloned(),
            most_blogs: self.most_blogs(),
            most_likes: self.most_likes()
        }
    }
}
