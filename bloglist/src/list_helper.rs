use crate::author_table::{AuthorTable, first_max_by_key};
use crate::blog::{BlogRecord, AuthorBlogCount, AuthorLikeTotal};

/// Sum of likes over all blogs, zero for an empty list
/// Likes of one blog fit in 32 bits, so the 64 bit total cannot overflow for any list that fits in memory
pub fn total_likes(blogs: &[BlogRecord]) -> u64
{
    blogs.iter().map(|blog| u64::from(blog.likes)).sum()
}

/// The blog with the most likes
/// When several blogs share the maximum, the one listed first is returned
pub fn favorite_blog(blogs: &[BlogRecord]) -> Option<&BlogRecord>
{
    if blogs.is_empty()
    {
        return None;
    }

    return first_max_by_key(blogs, |blog| blog.likes);
}

/// The author with the most blogs
/// Ties go to the author who appears first in the list
pub fn most_blogs(blogs: &[BlogRecord]) -> Option<AuthorBlogCount>
{
    if blogs.is_empty()
    {
        return None;
    }

    let mut counts: AuthorTable<usize> = AuthorTable::new();
    for blog in blogs
    {
        *counts.entry(&blog.author) += 1;
    }

    return counts.max_by_key(|count| *count)
        .map(|(author, count)| AuthorBlogCount { author: author.to_string(), blogs: *count });
}

/// The author whose blogs have the most likes in total
/// Ties go to the author who appears first in the list
pub fn most_likes(blogs: &[BlogRecord]) -> Option<AuthorLikeTotal>
{
    if blogs.is_empty()
    {
        return None;
    }

    let mut totals: AuthorTable<u64> = AuthorTable::new();
    for blog in blogs
    {
        *totals.entry(&blog.author) += u64::from(blog.likes);
    }

    return totals.max_by_key(|likes| *likes)
        .map(|(author, likes)| AuthorLikeTotal { author: author.to_string(), likes: *likes });
}
