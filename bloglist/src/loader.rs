use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use crate::blog::BlogRecord;
use crate::error::{BlogListError, Result};

// Blog document as served by the blog API, before validation
// Unknown fields are skipped
#[derive(Deserialize)]
struct BlogDocument
{
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    likes: Option<u32>,
    #[serde(default)]
    user: Option<Value>
}

impl BlogDocument
{
    // Turn the document into a record, rejecting it when a field used by aggregation is missing
    fn into_record(self, index: usize) -> Result<BlogRecord>
    {
        let author = self.author.ok_or_else(|| BlogListError::malformed(index, "author is missing"))?;
        let likes = self.likes.ok_or_else(|| BlogListError::malformed(index, "likes is missing"))?;

        return Ok(BlogRecord { id: self.id, title: self.title, author, url: self.url, likes, user: self.user });
    }
}

/// Read a JSON array of blogs
/// Negative, fractional or out of range likes (above `u32::MAX`) fail as JSON errors, missing author or likes as malformed records
pub fn load_blogs<R>(reader: R) -> Result<Vec<BlogRecord>> where R: Read
{
    let documents: Vec<BlogDocument> = serde_json::from_reader(reader)?;

    let blogs = documents.into_iter()
        .enumerate()
        .map(|(index, document)| document.into_record(index))
        .collect::<Result<Vec<BlogRecord>>>()?;

    debug!("Loaded {} blog records", blogs.len());

    return Ok(blogs);
}

/// Read a JSON array of blogs from a file
pub fn load_blogs_from_file(path: impl AsRef<Path>) -> Result<Vec<BlogRecord>>
{
    let path = path.as_ref();
    debug!("Reading blogs from {}", path.display());

    let file = File::open(path)?;
    load_blogs(BufReader::new(file))
}

#[cfg(test)]
mod tests {

    use super::*;

    // Documents in the shape the API lists them, with populated users
    #[test]
    fn load_api_documents_test()
    {
        let json = r#"[
            { "id": "5a422a851b54a676234d17f7", "title": "React patterns", "author": "Michael Chan",
              "url": "https://reactpatterns.com/", "likes": 7,
              "user": { "username": "root", "name": "root", "id": "6967f52ec0e8dc1a5921caec" } },
            { "title": "Type wars", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com", "likes": 2 }
        ]"#;

        let blogs = load_blogs(json.as_bytes()).unwrap();
        assert_eq!(2, blogs.len());
        assert_eq!(Some("5a422a851b54a676234d17f7"), blogs[0].id.as_deref());
        assert_eq!("Michael Chan", blogs[0].author);
        assert_eq!(7, blogs[0].likes);
        assert_eq!(None, blogs[1].id);
        assert_eq!(2, blogs[1].likes);

        // The owning user is kept as it was served
        assert_eq!(Some("root"), blogs[0].user.as_ref().and_then(|u| u["username"].as_str()));
        assert_eq!(None, blogs[1].user);
    }

    // A user given by id only is kept as a plain string
    #[test]
    fn user_id_test()
    {
        let json = r#"[ { "author": "A", "likes": 1, "user": "6967f52ec0e8dc1a5921caec" } ]"#;

        let blogs = load_blogs(json.as_bytes()).unwrap();
        assert_eq!(Some(&Value::from("6967f52ec0e8dc1a5921caec")), blogs[0].user.as_ref());
    }

    #[test]
    fn load_empty_list_test()
    {
        assert!(load_blogs("[]".as_bytes()).unwrap().is_empty());
    }

    // Missing likes are rejected instead of being counted as zero
    #[test]
    fn missing_likes_test()
    {
        let json = r#"[ { "author": "A", "likes": 1 }, { "author": "B" } ]"#;

        match load_blogs(json.as_bytes())
        {
            Err(BlogListError::MalformedRecord { index, reason }) => {
                assert_eq!(1, index);
                assert_eq!("likes is missing", reason);
            },
            other => panic!("Unexpected result: {:?}", other)
        }
    }

    #[test]
    fn missing_author_test()
    {
        let json = r#"[ { "author": null, "likes": 1 } ]"#;
        assert!(matches!(load_blogs(json.as_bytes()), Err(BlogListError::MalformedRecord { index: 0, .. })));
    }

    #[test]
    fn non_numeric_likes_test()
    {
        for json in [r#"[ { "author": "A", "likes": "many" } ]"#, r#"[ { "author": "A", "likes": -1 } ]"#, r#"[ { "author": "A", "likes": 1.5 } ]"#]
        {
            assert!(matches!(load_blogs(json.as_bytes()), Err(BlogListError::Json(_))));
        }
    }

    // Like counts too large to be summed safely are rejected while loading
    #[test]
    fn likes_out_of_range_test()
    {
        let json = r#"[ { "author": "A", "likes": 18446744073709551615 }, { "author": "A", "likes": 1 } ]"#;
        assert!(matches!(load_blogs(json.as_bytes()), Err(BlogListError::Json(_))));

        let json = r#"[ { "author": "A", "likes": 4294967296 } ]"#;
        assert!(matches!(load_blogs(json.as_bytes()), Err(BlogListError::Json(_))));

        let json = r#"[ { "author": "A", "likes": 4294967295 } ]"#;
        assert_eq!(u32::MAX, load_blogs(json.as_bytes()).unwrap()[0].likes);
    }

    #[test]
    fn load_from_file_test()
    {
        let path = std::env::temp_dir().join(format!("bloglist_loader_{}.json", std::process::id()));
        std::fs::write(&path, r#"[ { "author": "A", "likes": 5 } ]"#).unwrap();

        let blogs = load_blogs_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(vec![BlogRecord::new("A", 5)], blogs);
    }

    #[test]
    fn missing_file_test()
    {
        let path = std::env::temp_dir().join("bloglist_loader_does_not_exist.json");
        assert!(matches!(load_blogs_from_file(&path), Err(BlogListError::Io(_))));
    }
}
