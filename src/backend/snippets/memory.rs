/**
 * In-Memory Snippet Store
 *
 * Keeps snippets in a `HashMap` behind a tokio `RwLock`. Used when no
 * `DATABASE_URL` is configured, and as the backing store in tests.
 * Contents are lost when the process exits.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::snippets::store::{SnippetStore, StoreError};
use crate::shared::{Snippet, SnippetField};

#[derive(Debug, Default)]
pub struct InMemorySnippetStore {
    snippets: RwLock<HashMap<String, Snippet>>,
}

impl InMemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snippets
    pub async fn len(&self) -> usize {
        self.snippets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snippets.read().await.is_empty()
    }
}

fn newest_first(mut snippets: Vec<Snippet>) -> Vec<Snippet> {
    snippets.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    snippets
}

#[async_trait]
impl SnippetStore for InMemorySnippetStore {
    async fn get_snippet(&self, id: &str) -> Result<Snippet, StoreError> {
        self.snippets
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn get_snippets(&self) -> Result<Vec<Snippet>, StoreError> {
        let snippets = self.snippets.read().await.values().cloned().collect();
        Ok(newest_first(snippets))
    }

    async fn get_snippets_user(&self, user_id: &str) -> Result<Vec<Snippet>, StoreError> {
        let snippets = self
            .snippets
            .read()
            .await
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(snippets))
    }

    async fn create_snippet(&self, snippet: &Snippet) -> Result<Snippet, StoreError> {
        let mut snippets = self.snippets.write().await;
        if snippets.contains_key(&snippet.id) {
            return Err(StoreError::Duplicate {
                id: snippet.id.clone(),
            });
        }

        let now = Utc::now();
        let mut stored = snippet.clone();
        stored.created_at = now;
        stored.updated_at = now;
        snippets.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn update_snippet_multi(&self, snippet: &Snippet) -> Result<Snippet, StoreError> {
        let mut snippets = self.snippets.write().await;
        let stored = snippets
            .get_mut(&snippet.id)
            .ok_or_else(|| StoreError::not_found(&snippet.id))?;

        stored.title = snippet.title.clone();
        stored.description = snippet.description.clone();
        stored.code = snippet.code.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn update_snippet_single(
        &self,
        id: &str,
        field: SnippetField,
        value: &str,
    ) -> Result<Snippet, StoreError> {
        let mut snippets = self.snippets.write().await;
        let stored = snippets
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(id))?;

        stored.set_field(field, value.to_string());
        Ok(stored.clone())
    }

    async fn delete_snippet(&self, id: &str) -> Result<(), StoreError> {
        self.snippets
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
