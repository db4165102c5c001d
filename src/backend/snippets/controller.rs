/**
 * Snippet Controller
 *
 * Request-handling rules for the snippet endpoints, independent of axum
 * extractors: validate the body, load the existing record, check
 * ownership, call the store, and pick the response.
 *
 * # Status Mapping
 *
 * | Operation | Success | Store failure |
 * |---|---|---|
 * | create | 201 | 500 |
 * | get one | 200 | 404 |
 * | get all / get all for user | 200 | 404 (any failure) |
 * | update multi | 200 | 500 |
 * | update one | 200 | 400 |
 * | delete | 204 | 500 |
 *
 * The list endpoints report every store failure as 404 and single-field
 * updates report store failures as 400. Both match the behaviour clients
 * of this API already depend on.
 *
 * Ownership checks read the snippet and then mutate it in a second store
 * call; nothing holds the record in between.
 */

use axum::http::StatusCode;

use crate::backend::auth::Session;
use crate::backend::error::BackendError;
use crate::backend::response::ApiResponse;
use crate::backend::snippets::store::SharedSnippetStore;
use crate::shared::{SharedError, Snippet, SnippetPayload, UpdateOneData};

#[derive(Clone)]
pub struct SnippetController {
    snippets: SharedSnippetStore,
}

impl SnippetController {
    pub fn new(snippets: SharedSnippetStore) -> Self {
        Self { snippets }
    }

    pub fn store(&self) -> &SharedSnippetStore {
        &self.snippets
    }

    /// Create a snippet owned by the session user under a fresh id
    pub async fn create_snippet(
        &self,
        session: &Session,
        payload: SnippetPayload,
    ) -> Result<ApiResponse<Snippet>, BackendError> {
        let fields = payload.validate().map_err(SharedError::from)?;
        let snippet = Snippet::create(session.user_id.clone(), fields);

        let created = self.snippets.create_snippet(&snippet).await.map_err(|e| {
            BackendError::internal("An error occurred while creating snippet", e)
        })?;

        tracing::info!(snippet_id = %created.id, user_id = %created.user_id, "Snippet created");
        Ok(ApiResponse::created("Snippet created", created))
    }

    pub async fn get_snippet_by_id(&self, id: &str) -> Result<ApiResponse<Snippet>, BackendError> {
        let snippet = self.find(id).await?;
        Ok(ApiResponse::ok("Snippet found", snippet))
    }

    pub async fn get_all_snippets(&self) -> Result<ApiResponse<Vec<Snippet>>, BackendError> {
        let snippets = self
            .snippets
            .get_snippets()
            .await
            .map_err(|e| BackendError::not_found("Error fetching snippets", e))?;
        Ok(ApiResponse::ok("Snippets found", snippets))
    }

    pub async fn get_all_user_snippets(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<Vec<Snippet>>, BackendError> {
        let snippets = self
            .snippets
            .get_snippets_user(user_id)
            .await
            .map_err(|e| BackendError::not_found("Error fetching snippets", e))?;
        Ok(ApiResponse::ok("User's snippets found", snippets))
    }

    /// Replace every editable field. `id` and `user_id` always come from the stored record.
    pub async fn update_snippet_multi(
        &self,
        session: &Session,
        id: &str,
        payload: SnippetPayload,
    ) -> Result<ApiResponse<Snippet>, BackendError> {
        let fields = payload.validate().map_err(SharedError::from)?;
        let existing = self.find_owned(session, id).await?;
        let replacement = existing.replaced_with(fields);

        let updated = self
            .snippets
            .update_snippet_multi(&replacement)
            .await
            .map_err(|e| BackendError::internal("Unable to update snippet", e))?;

        tracing::info!(snippet_id = %updated.id, "Snippet replaced");
        Ok(ApiResponse::ok("Updated snippet", updated))
    }

    /// Update one allow-listed field
    pub async fn update_snippet_one(
        &self,
        session: &Session,
        id: &str,
        data: UpdateOneData,
    ) -> Result<ApiResponse<Snippet>, BackendError> {
        let update = data.validate().map_err(SharedError::from)?;
        let existing = self.find_owned(session, id).await?;
        let field = update.resolve()?;

        let updated = self
            .snippets
            .update_snippet_single(&existing.id, field, &update.value)
            .await
            .map_err(|e| {
                BackendError::bad_request("An error occurred while updating the resource", e)
            })?;

        tracing::info!(snippet_id = %updated.id, field = %field, "Snippet field updated");
        Ok(ApiResponse::ok("Updated snippet", updated))
    }

    pub async fn delete_snippet(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<StatusCode, BackendError> {
        let existing = self.find_owned(session, id).await?;

        self.snippets
            .delete_snippet(&existing.id)
            .await
            .map_err(|e| BackendError::internal("An error occurred while deleting snippet", e))?;

        tracing::info!(snippet_id = %existing.id, "Snippet deleted");
        Ok(StatusCode::NO_CONTENT)
    }

    async fn find(&self, id: &str) -> Result<Snippet, BackendError> {
        self.snippets
            .get_snippet(id)
            .await
            .map_err(|e| BackendError::not_found(format!("Snippet with {} not found", id), e))
    }

    async fn find_owned(&self, session: &Session, id: &str) -> Result<Snippet, BackendError> {
        let snippet = self.find(id).await?;
        if !session.owns(&snippet.user_id) {
            tracing::debug!(
                snippet_id = %id,
                owner = %snippet.user_id,
                user_id = %session.user_id,
                "Ownership check failed"
            );
            return Err(BackendError::not_owner());
        }
        Ok(snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::backend::snippets::memory::InMemorySnippetStore;
    use crate::backend::snippets::store::{SnippetStore, StoreError};
    use crate::shared::SnippetField;

    /// Wraps the in-memory store and counts mutating calls
    #[derive(Default)]
    struct CountingStore {
        inner: InMemorySnippetStore,
        mutations: AtomicUsize,
    }

    impl CountingStore {
        fn mutations(&self) -> usize {
            self.mutations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SnippetStore for CountingStore {
        async fn get_snippet(&self, id: &str) -> Result<Snippet, StoreError> {
            self.inner.get_snippet(id).await
        }
        async fn get_snippets(&self) -> Result<Vec<Snippet>, StoreError> {
            self.inner.get_snippets().await
        }
        async fn get_snippets_user(&self, user_id: &str) -> Result<Vec<Snippet>, StoreError> {
            self.inner.get_snippets_user(user_id).await
        }
        async fn create_snippet(&self, snippet: &Snippet) -> Result<Snippet, StoreError> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.inner.create_snippet(snippet).await
        }
        async fn update_snippet_multi(&self, snippet: &Snippet) -> Result<Snippet, StoreError> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.inner.update_snippet_multi(snippet).await
        }
        async fn update_snippet_single(
            &self,
            id: &str,
            field: SnippetField,
            value: &str,
        ) -> Result<Snippet, StoreError> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.inner.update_snippet_single(id, field, value).await
        }
        async fn delete_snippet(&self, id: &str) -> Result<(), StoreError> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.inner.delete_snippet(id).await
        }
    }

    /// Reads succeed against a fixed snippet, every other call fails
    struct BrokenStore {
        snippet: Snippet,
    }

    fn db_error() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl SnippetStore for BrokenStore {
        async fn get_snippet(&self, _id: &str) -> Result<Snippet, StoreError> {
            Ok(self.snippet.clone())
        }
        async fn get_snippets(&self) -> Result<Vec<Snippet>, StoreError> {
            Err(db_error())
        }
        async fn get_snippets_user(&self, _user_id: &str) -> Result<Vec<Snippet>, StoreError> {
            Err(db_error())
        }
        async fn create_snippet(&self, _snippet: &Snippet) -> Result<Snippet, StoreError> {
            Err(db_error())
        }
        async fn update_snippet_multi(&self, _snippet: &Snippet) -> Result<Snippet, StoreError> {
            Err(db_error())
        }
        async fn update_snippet_single(
            &self,
            _id: &str,
            _field: SnippetField,
            _value: &str,
        ) -> Result<Snippet, StoreError> {
            Err(db_error())
        }
        async fn delete_snippet(&self, _id: &str) -> Result<(), StoreError> {
            Err(db_error())
        }
    }

    fn payload(title: &str) -> SnippetPayload {
        SnippetPayload {
            title: Some(title.to_string()),
            description: Some("d".to_string()),
            code: Some("c".to_string()),
        }
    }

    fn update_one(field: &str, value: &str) -> UpdateOneData {
        UpdateOneData {
            field: Some(field.to_string()),
            value: Some(value.to_string()),
        }
    }

    fn counting() -> (Arc<CountingStore>, SnippetController) {
        let store = Arc::new(CountingStore::default());
        let controller = SnippetController::new(store.clone());
        (store, controller)
    }

    fn broken() -> SnippetController {
        let snippet = Snippet::create(
            "u1",
            crate::shared::SnippetFields {
                title: "t".to_string(),
                description: "d".to_string(),
                code: "c".to_string(),
            },
        );
        SnippetController::new(Arc::new(BrokenStore { snippet }))
    }

    #[tokio::test]
    async fn test_create_assigns_owner_and_id() {
        let (_, controller) = counting();
        let response = controller
            .create_snippet(&Session::new("u1"), payload("t"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.message(), "Snippet created");
        assert_eq!(response.data().user_id, "u1");
        assert!(!response.data().id.is_empty());
    }

    #[tokio::test]
    async fn test_create_missing_fields() {
        let (store, controller) = counting();
        let err = controller
            .create_snippet(&Session::new("u1"), SnippetPayload::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Missing parameters");
        assert_eq!(store.mutations(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_snippet() {
        let (_, controller) = counting();
        let err = controller.get_snippet_by_id("abc").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Snippet with abc not found");
    }

    #[tokio::test]
    async fn test_update_multi_keeps_id_and_owner() {
        let (_, controller) = counting();
        let owner = Session::new("u1");
        let created = controller
            .create_snippet(&owner, payload("t"))
            .await
            .unwrap()
            .into_data();

        let updated = controller
            .update_snippet_multi(&owner, &created.id, payload("renamed"))
            .await
            .unwrap()
            .into_data();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.title, "renamed");
    }

    #[tokio::test]
    async fn test_update_multi_by_other_user() {
        let (store, controller) = counting();
        let created = controller
            .create_snippet(&Session::new("u1"), payload("t"))
            .await
            .unwrap()
            .into_data();

        let err = controller
            .update_snippet_multi(&Session::new("u2"), &created.id, payload("stolen"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.detail(), "Not authorized");
        assert_eq!(store.mutations(), 1);
        assert_eq!(
            controller.get_snippet_by_id(&created.id).await.unwrap().data().title,
            "t"
        );
    }

    #[tokio::test]
    async fn test_update_multi_validates_before_lookup() {
        let (_, controller) = counting();
        let err = controller
            .update_snippet_multi(&Session::new("u1"), "missing", SnippetPayload::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_one_invalid_field_skips_store() {
        let (store, controller) = counting();
        let owner = Session::new("u1");
        let created = controller
            .create_snippet(&owner, payload("t"))
            .await
            .unwrap()
            .into_data();

        let err = controller
            .update_snippet_one(&owner, &created.id, update_one("user_id", "u2"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "You can't update that parameter");
        assert_eq!(store.mutations(), 1);
    }

    #[tokio::test]
    async fn test_update_one_checks_owner_before_field() {
        let (_, controller) = counting();
        let created = controller
            .create_snippet(&Session::new("u1"), payload("t"))
            .await
            .unwrap()
            .into_data();

        let err = controller
            .update_snippet_one(&Session::new("u2"), &created.id, update_one("id", "x"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = controller
            .update_snippet_one(&Session::new("u1"), "missing", update_one("id", "x"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_one_success() {
        let (_, controller) = counting();
        let owner = Session::new("u1");
        let created = controller
            .create_snippet(&owner, payload("t"))
            .await
            .unwrap()
            .into_data();

        let response = controller
            .update_snippet_one(&owner, &created.id, update_one("code", "let x = 1;"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.data().code, "let x = 1;");
        assert_eq!(response.data().id, created.id);
        assert_eq!(response.data().user_id, "u1");
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let (_, controller) = counting();
        let created = controller
            .create_snippet(&Session::new("u1"), payload("t"))
            .await
            .unwrap()
            .into_data();

        let err = controller
            .delete_snippet(&Session::new("u2"), &created.id)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let status = controller
            .delete_snippet(&Session::new("u1"), &created.id)
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        assert_matches!(
            controller.get_snippet_by_id(&created.id).await,
            Err(BackendError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn test_store_failures_map_per_operation() {
        let controller = broken();
        let owner = Session::new("u1");
        let id = "any";

        let err = controller.create_snippet(&owner, payload("t")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = controller.get_all_snippets().await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = controller.get_all_user_snippets("u1").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = controller
            .update_snippet_multi(&owner, id, payload("t"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = controller
            .update_snippet_one(&owner, id, update_one("title", "x"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = controller.delete_snippet(&owner, id).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_list_user_snippets() {
        let (_, controller) = counting();
        controller.create_snippet(&Session::new("u1"), payload("a")).await.unwrap();
        controller.create_snippet(&Session::new("u2"), payload("b")).await.unwrap();

        let all = controller.get_all_snippets().await.unwrap();
        assert_eq!(all.data().len(), 2);

        let mine = controller.get_all_user_snippets("u2").await.unwrap();
        assert_eq!(mine.message(), "User's snippets found");
        assert_eq!(mine.data().len(), 1);
        assert_eq!(mine.data()[0].title, "b");
    }
}
