use super::dto::GetCategoryInput;
use crate::application::common::dto::CategoryOutput;
use crate::domain::category::{errors::DomainError, repository::CategoryRepository};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

pub struct GetCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Reads a committed category.
    ///
    /// # Errors
    /// Returns `NotFound` when no committed category has `input.id`, or any
    /// other repository error unchanged.
    #[instrument(skip_all, fields(id = %input.id))]
    pub async fn execute(
        &self,
        input: GetCategoryInput,
        cancellation: &CancellationToken,
    ) -> Result<CategoryOutput, DomainError> {
        let category = self.repository.get(input.id, cancellation).await?;
        Ok(CategoryOutput::from(&category))
    }
}
