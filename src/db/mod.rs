//! JSON file persistence for blog posts.
//!
//! The backing file holds the whole collection as one JSON array and is the
//! source of truth. Reads are fail-soft: a missing or corrupt file loads as an
//! empty collection. Writes replace the file in full and report failures.

mod repository;

pub use repository::*;

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::models::Post;

/// Failure to persist the post collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write post store {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no post ID left after {}", u64::MAX)]
    IdsExhausted,
    #[error("failed to encode posts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reads and writes the post collection at a single file path.
#[derive(Debug, Clone)]
pub struct PostStore {
    path: PathBuf,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. Never fails.
    pub async fn load(&self) -> Vec<Post> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Post store {:?} does not exist yet", self.path);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read post store {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(
                    "Post store {:?} is not a valid post list, treating as empty: {}",
                    self.path,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the backing file with `posts`.
    pub async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let encoded = encode(posts)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, encoded)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

/// Pretty-print with four-space indentation.
fn encode(posts: &[Post]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    posts.serialize(&mut serializer)?;
    Ok(buf)
}
