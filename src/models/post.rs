//! Blog post model matching the persisted JSON record.

use serde::{Deserialize, Serialize};

/// A single blog entry.
///
/// Serialized field order matches the on-disk layout: `id`, `author`,
/// `title`, `content`, `likes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
    /// Records written before the counter existed load as 0.
    #[serde(default)]
    pub likes: u64,
}

/// Author, title and content of a post, as submitted for create or update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostInput {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl PostInput {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_likes_defaults_to_zero() {
        let post: Post =
            serde_json::from_str(r#"{"id": 7, "author": "A", "title": "T", "content": "C"}"#)
                .unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_serialized_field_names() {
        let post = Post {
            id: 1,
            author: "A".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            likes: 3,
        };
        let value = serde_json::to_value(&post).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for key in ["id", "author", "title", "content", "likes"] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(value["likes"], 3);
    }
}
