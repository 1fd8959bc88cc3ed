use crate::helpers::setup;
use async_trait::async_trait;
use catalog::{
    application::{
        create_category::{dto::CreateCategoryInput, use_case::CreateCategoryUseCase},
        get_category::dto::GetCategoryInput,
        update_category::dto::UpdateCategoryInput,
    },
    domain::category::{entity::Category, errors::DomainError, repository::CategoryRepository},
    infrastructure::persistence::in_memory::{InMemoryCatalog, InMemoryCategoryRepository},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Cancels the caller's token as soon as an insert has been staged, so the
/// following commit observes the cancellation.
struct CancelAfterInsert {
    inner: InMemoryCategoryRepository,
}

#[async_trait]
impl CategoryRepository for CancelAfterInsert {
    async fn insert(
        &self,
        category: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), DomainError> {
        self.inner.insert(category, cancellation).await?;
        cancellation.cancel();
        Ok(())
    }

    async fn get(&self, id: Uuid, cancellation: &CancellationToken) -> Result<Category, DomainError> {
        self.inner.get(id, cancellation).await
    }

    async fn update(
        &self,
        category: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), DomainError> {
        self.inner.update(category, cancellation).await
    }
}

#[tokio::test]
async fn created_category_can_be_read_back() {
    let app = setup();
    let token = CancellationToken::new();

    let created = app
        .create
        .execute(CreateCategoryInput::new("Movies", "Film catalog", false), &token)
        .await
        .unwrap();
    let fetched = app
        .get
        .execute(GetCategoryInput { id: created.id }, &token)
        .await
        .unwrap();

    assert_eq!(fetched, created);
    assert!(!fetched.is_active);
    assert_eq!(app.catalog.committed_count().await, 1);
    assert_eq!(app.catalog.pending_count().await, 0);
}

#[tokio::test]
async fn rejected_input_leaves_catalog_empty() {
    let app = setup();

    let err = app
        .create
        .execute(
            CreateCategoryInput::new("ab", "Film catalog", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Name should be at least 3 characters long");
    assert_eq!(app.catalog.committed_count().await, 0);
    assert_eq!(app.catalog.pending_count().await, 0);
}

#[tokio::test]
async fn json_records_with_null_fields_are_rejected() {
    let app = setup();
    let input: CreateCategoryInput =
        serde_json::from_str(r#"{"name":"Movies","description":null}"#).unwrap();

    let err = app
        .create
        .execute(input, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::ValidationError("Description should not be null".into()));
}

#[tokio::test]
async fn update_renames_and_toggles_activation() {
    let app = setup();
    let token = CancellationToken::new();
    let created = app
        .create
        .execute(CreateCategoryInput::new("Movies", "Film catalog", true), &token)
        .await
        .unwrap();

    let updated = app
        .update
        .execute(
            UpdateCategoryInput {
                id: created.id,
                name: "Series".into(),
                description: None,
                is_active: Some(false),
            },
            &token,
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Series");
    assert_eq!(updated.description, "Film catalog");
    assert!(!updated.is_active);
    assert_eq!(updated.created_at, created.created_at);

    let fetched = app
        .get
        .execute(GetCategoryInput { id: created.id }, &token)
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn cancelled_import_persists_nothing() {
    let app = setup();
    let token = CancellationToken::new();
    token.cancel();

    let err = app
        .create
        .execute(CreateCategoryInput::new("Movies", "Film catalog", true), &token)
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::Cancelled);
    assert_eq!(app.catalog.committed_count().await, 0);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = setup();
    let err = app
        .get
        .execute(
            GetCategoryInput {
                id: uuid::Uuid::now_v7(),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn create_cancelled_at_commit_is_not_persisted_by_a_later_create() {
    let catalog = InMemoryCatalog::new();
    let interrupted = CreateCategoryUseCase::new(
        Arc::new(CancelAfterInsert {
            inner: catalog.repository(),
        }),
        Arc::new(catalog.unit_of_work()),
    );
    let normal = CreateCategoryUseCase::new(
        Arc::new(catalog.repository()),
        Arc::new(catalog.unit_of_work()),
    );

    let err = interrupted
        .execute(
            CreateCategoryInput::new("Movies", "Film catalog", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Cancelled);

    let kept = normal
        .execute(
            CreateCategoryInput::new("Series", "Episodic shows", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(catalog.committed_count().await, 1);
    assert_eq!(catalog.pending_count().await, 0);
    assert!(catalog
        .repository()
        .get(kept.id, &CancellationToken::new())
        .await
        .is_ok());
}
