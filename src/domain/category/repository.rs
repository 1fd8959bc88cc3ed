use super::entity::Category;
use super::errors::DomainError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Storage of [`Category`] aggregates.
///
/// Writes are staged until the owning [`UnitOfWork`](crate::domain::shared::unit_of_work::UnitOfWork)
/// commits. Implementations return [`DomainError::Cancelled`] without side
/// effects when the token is already cancelled.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(
        &self,
        category: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), DomainError>;
    async fn get(&self, id: Uuid, cancellation: &CancellationToken)
    -> Result<Category, DomainError>;
    async fn update(
        &self,
        category: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), DomainError>;
}
