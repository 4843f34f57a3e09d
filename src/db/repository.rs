//! Post repository for CRUD and like operations.
//!
//! Every operation loads the full collection, transforms it in memory and,
//! when something changed, writes the whole collection back.

use tokio::sync::Mutex;

use super::{PostStore, StoreError};
use crate::models::{Post, PostInput};

/// Repository over a [`PostStore`].
///
/// Every operation runs behind one lock: writers cannot lose each other's
/// changes, and readers never see a file that is half rewritten.
#[derive(Debug)]
pub struct PostRepository {
    store: PostStore,
    lock: Mutex<()>,
}

impl PostRepository {
    pub fn new(store: PostStore) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// List all posts in stored order.
    pub async fn list_posts(&self) -> Vec<Post> {
        let _guard = self.lock.lock().await;
        self.store.load().await
    }

    /// Get a post by ID.
    pub async fn get_post(&self, id: u64) -> Option<Post> {
        let _guard = self.lock.lock().await;
        self.store.load().await.into_iter().find(|post| post.id == id)
    }

    /// Create a new post with the next free ID and zero likes.
    ///
    /// Does not validate `input`; callers run the validator first.
    pub async fn create_post(&self, input: &PostInput) -> Result<Post, StoreError> {
        let _guard = self.lock.lock().await;
        let mut posts = self.store.load().await;

        let id = next_id(&posts).ok_or(StoreError::IdsExhausted)?;
        let post = Post {
            id,
            author: input.author.clone(),
            title: input.title.clone(),
            content: input.content.clone(),
            likes: 0,
        };
        posts.push(post.clone());
        self.store.save(&posts).await?;

        tracing::info!("Created post {}", post.id);
        Ok(post)
    }

    /// Replace author, title and content of a post and return the updated post.
    pub async fn update_post(
        &self,
        id: u64,
        input: &PostInput,
    ) -> Result<Option<Post>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut posts = self.store.load().await;

        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            tracing::debug!("Update of unknown post {}", id);
            return Ok(None);
        };
        post.author = input.author.clone();
        post.title = input.title.clone();
        post.content = input.content.clone();
        let updated = post.clone();

        self.store.save(&posts).await?;
        tracing::info!("Updated post {}", id);
        Ok(Some(updated))
    }

    /// Delete every post carrying `id`. Returns false, without writing, if none did.
    pub async fn delete_post(&self, id: u64) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let mut posts = self.store.load().await;

        let initial_count = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == initial_count {
            tracing::debug!("Delete of unknown post {}", id);
            return Ok(false);
        }

        self.store.save(&posts).await?;
        tracing::info!("Deleted post {}", id);
        Ok(true)
    }

    /// Increment the like counter of a post by one and return the updated post.
    pub async fn like_post(&self, id: u64) -> Result<Option<Post>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut posts = self.store.load().await;

        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            tracing::debug!("Like of unknown post {}", id);
            return Ok(None);
        };
        post.likes = post.likes.saturating_add(1);
        let liked = post.clone();

        self.store.save(&posts).await?;
        tracing::info!("Liked post {} ({} likes)", id, liked.likes);
        Ok(Some(liked))
    }
}

/// Highest existing ID plus one, or 1 for an empty collection. Gaps are not reused.
///
/// `None` once the highest ID is `u64::MAX`.
fn next_id(posts: &[Post]) -> Option<u64> {
    match posts.iter().map(|post| post.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
