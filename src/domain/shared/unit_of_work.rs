use crate::domain::category::errors::DomainError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;

/// Finalizes the writes staged by repositories sharing the same store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self, cancellation: &CancellationToken) -> Result<(), DomainError>;
}
