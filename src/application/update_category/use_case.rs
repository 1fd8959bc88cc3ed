use super::dto::UpdateCategoryInput;
use crate::application::common::dto::CategoryOutput;
use crate::domain::{
    category::{errors::DomainError, repository::CategoryRepository},
    shared::unit_of_work::UnitOfWork,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Loads a category, applies the requested changes and persists them in a
/// single unit of work.
pub struct UpdateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    /// Renames the category, optionally replaces its description and sets
    /// its activation state, then updates it once and commits once.
    ///
    /// # Errors
    /// - `NotFound` when no committed category has `input.id`
    /// - `ValidationError` when the new name or description breaks a rule;
    ///   nothing is written
    /// - any repository or unit-of-work error, returned unchanged; the commit
    ///   is skipped when the update fails
    #[instrument(skip_all, fields(id = %input.id, is_active = ?input.is_active))]
    pub async fn execute(
        &self,
        input: UpdateCategoryInput,
        cancellation: &CancellationToken,
    ) -> Result<CategoryOutput, DomainError> {
        let mut category = self.repository.get(input.id, cancellation).await?;

        category
            .update(&input.name, input.description.as_deref())
            .inspect_err(|e| warn!("Rejected update for category {}: {}", input.id, e))?;

        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        debug!("Updating category {}", category.id());
        self.repository
            .update(&category, cancellation)
            .await
            .inspect_err(|e| error!("Update failed for category {}: {}", category.id(), e))?;

        self.unit_of_work
            .commit(cancellation)
            .await
            .inspect_err(|e| error!("Commit failed for category {}: {}", category.id(), e))?;

        info!("Updated category {}", category.id());
        Ok(CategoryOutput::from(&category))
    }
}
