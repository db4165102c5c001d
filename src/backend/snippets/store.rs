//! Storage abstraction for snippets.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{Snippet, SnippetField};

/// Errors reported by a [`SnippetStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no snippet with id {id}")]
    NotFound { id: String },

    #[error("a snippet with id {id} already exists")]
    Duplicate { id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Persistence collaborator used by the snippet controller
///
/// Implementations own `created_at`/`updated_at` and never change a stored
/// snippet's `id` or `user_id` on update.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Fetch one snippet. A miss is `StoreError::NotFound`.
    async fn get_snippet(&self, id: &str) -> Result<Snippet, StoreError>;

    /// Every snippet, newest first.
    async fn get_snippets(&self) -> Result<Vec<Snippet>, StoreError>;

    /// Every snippet owned by `user_id`, newest first.
    async fn get_snippets_user(&self, user_id: &str) -> Result<Vec<Snippet>, StoreError>;

    /// Insert a new snippet and return it as stored.
    async fn create_snippet(&self, snippet: &Snippet) -> Result<Snippet, StoreError>;

    /// Replace title, description and code of the snippet with `snippet.id`.
    async fn update_snippet_multi(&self, snippet: &Snippet) -> Result<Snippet, StoreError>;

    /// Set one editable field of the snippet with `id`.
    async fn update_snippet_single(
        &self,
        id: &str,
        field: SnippetField,
        value: &str,
    ) -> Result<Snippet, StoreError>;

    /// Remove the snippet with `id`. A miss is `StoreError::NotFound`.
    async fn delete_snippet(&self, id: &str) -> Result<(), StoreError>;
}

/// Store handle shared across request handlers
pub type SharedSnippetStore = Arc<dyn SnippetStore>;
