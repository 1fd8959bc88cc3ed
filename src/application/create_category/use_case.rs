use super::dto::{CreateCategoryInput, CreateCategoryOutput};
use crate::domain::{
    category::{entity::Category, errors::DomainError, repository::CategoryRepository},
    shared::unit_of_work::UnitOfWork,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Creates a category and persists it in a single unit of work.
///
/// Validation runs before any collaborator is touched, so a rejected input
/// never reaches the repository. Errors from the entity, the repository and
/// the unit of work are returned unchanged.
pub struct CreateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    /// Validates `input`, inserts the new category once and commits once.
    ///
    /// The commit is only attempted after a successful insert.
    ///
    /// # Errors
    /// - `ValidationError` carrying the first broken rule's message; the
    ///   repository is never called
    /// - any error from `insert` or `commit`, returned unchanged
    #[instrument(skip_all, fields(name = ?input.name, is_active = input.is_active))]
    pub async fn execute(
        &self,
        input: CreateCategoryInput,
        cancellation: &CancellationToken,
    ) -> Result<CreateCategoryOutput, DomainError> {
        let category = Category::from_nullable(input.name, input.description, input.is_active)
            .inspect_err(|e| warn!("Rejected category input: {}", e))?;

        debug!("Inserting category {}", category.id());
        self.repository
            .insert(&category, cancellation)
            .await
            .inspect_err(|e| error!("Insert failed for category {}: {}", category.id(), e))?;

        self.unit_of_work
            .commit(cancellation)
            .await
            .inspect_err(|e| error!("Commit failed for category {}: {}", category.id(), e))?;

        info!("Created category {}", category.id());
        Ok(CreateCategoryOutput::from(&category))
    }
}
