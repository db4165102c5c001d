//! PostgreSQL snippet store
//!
//! Backed by the `snippets` table created in `migrations/`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::snippets::store::{SnippetStore, StoreError};
use crate::shared::{Snippet, SnippetField};

const COLUMNS: &str = "id, user_id, title, description, code, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgSnippetStore {
    pool: PgPool,
}

impl PgSnippetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SnippetStore for PgSnippetStore {
    async fn get_snippet(&self, id: &str) -> Result<Snippet, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM snippets WHERE id = $1");
        sqlx::query_as::<_, Snippet>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn get_snippets(&self) -> Result<Vec<Snippet>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM snippets ORDER BY created_at DESC, id");
        let snippets = sqlx::query_as::<_, Snippet>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(snippets)
    }

    async fn get_snippets_user(&self, user_id: &str) -> Result<Vec<Snippet>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM snippets WHERE user_id = $1 ORDER BY created_at DESC, id"
        );
        let snippets = sqlx::query_as::<_, Snippet>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(snippets)
    }

    async fn create_snippet(&self, snippet: &Snippet) -> Result<Snippet, StoreError> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO snippets (id, user_id, title, description, code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {COLUMNS}
            "#
        );
        let stored = sqlx::query_as::<_, Snippet>(&query)
            .bind(&snippet.id)
            .bind(&snippet.user_id)
            .bind(&snippet.title)
            .bind(&snippet.description)
            .bind(&snippet.code)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(stored)
    }

    async fn update_snippet_multi(&self, snippet: &Snippet) -> Result<Snippet, StoreError> {
        let query = format!(
            r#"
            UPDATE snippets
            SET title = $2, description = $3, code = $4, updated_at = $5
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );
        sqlx::query_as::<_, Snippet>(&query)
            .bind(&snippet.id)
            .bind(&snippet.title)
            .bind(&snippet.description)
            .bind(&snippet.code)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found(&snippet.id))
    }

    async fn update_snippet_single(
        &self,
        id: &str,
        field: SnippetField,
        value: &str,
    ) -> Result<Snippet, StoreError> {
        // Only the allow-listed column name is interpolated.
        let query = format!(
            "UPDATE snippets SET {} = $2, updated_at = $3 WHERE id = $1 RETURNING {COLUMNS}",
            field.as_str()
        );
        sqlx::query_as::<_, Snippet>(&query)
            .bind(id)
            .bind(value)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn delete_snippet(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}
