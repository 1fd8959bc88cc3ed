//! In-memory persistence for categories.
//!
//! A single [`InMemoryCatalog`] backs both the repository and the unit of
//! work. Repository writes land in a staging area and become visible to
//! reads only once [`InMemoryUnitOfWork::commit`] applies them.

use crate::domain::{
    category::{entity::Category, errors::DomainError, repository::CategoryRepository},
    shared::unit_of_work::UnitOfWork,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug)]
enum StagedWrite {
    Insert(Category),
    Update(Category),
}

#[derive(Debug, Default)]
struct CatalogState {
    committed: HashMap<Uuid, Category>,
    staged: Vec<StagedWrite>,
}

impl CatalogState {
    fn is_staged_insert(&self, id: Uuid) -> bool {
        self.staged
            .iter()
            .any(|w| matches!(w, StagedWrite::Insert(c) if c.id() == id))
    }
}

/// Shared store handed to the in-memory repository and unit of work.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            catalog: self.clone(),
        }
    }

    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            catalog: self.clone(),
        }
    }

    pub async fn committed_count(&self) -> usize {
        self.state.lock().await.committed.len()
    }

    pub async fn pending_count(&self) -> usize {
        self.state.lock().await.staged.len()
    }
}

fn ensure_not_cancelled(cancellation: &CancellationToken) -> Result<(), DomainError> {
    if cancellation.is_cancelled() {
        return Err(DomainError::Cancelled);
    }
    Ok(())
}

pub struct InMemoryCategoryRepository {
    catalog: InMemoryCatalog,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(
        &self,
        category: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), DomainError> {
        ensure_not_cancelled(cancellation)?;
        let mut state = self.catalog.state.lock().await;

        let id = category.id();
        if state.committed.contains_key(&id) || state.is_staged_insert(id) {
            return Err(DomainError::InfrastructureError(format!(
                "Category {id} already exists"
            )));
        }

        debug!("Staging insert of category {}", id);
        state.staged.push(StagedWrite::Insert(category.clone()));
        Ok(())
    }

    async fn get(&self, id: Uuid, cancellation: &CancellationToken) -> Result<Category, DomainError> {
        ensure_not_cancelled(cancellation)?;
        let state = self.catalog.state.lock().await;
        state
            .committed
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Category {id}")))
    }

    async fn update(
        &self,
        category: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), DomainError> {
        ensure_not_cancelled(cancellation)?;
        let mut state = self.catalog.state.lock().await;

        let id = category.id();
        if !state.committed.contains_key(&id) && !state.is_staged_insert(id) {
            return Err(DomainError::NotFound(format!("Category {id}")));
        }

        debug!("Staging update of category {}", id);
        state.staged.push(StagedWrite::Update(category.clone()));
        Ok(())
    }
}

pub struct InMemoryUnitOfWork {
    catalog: InMemoryCatalog,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    /// Applies every staged write, or none of them.
    ///
    /// A cancelled commit discards the staged writes so they cannot be
    /// picked up by a later, unrelated commit.
    async fn commit(&self, cancellation: &CancellationToken) -> Result<(), DomainError> {
        let mut state = self.catalog.state.lock().await;
        let staged = std::mem::take(&mut state.staged);

        if let Err(e) = ensure_not_cancelled(cancellation) {
            debug!("Discarding {} staged writes", staged.len());
            return Err(e);
        }

        debug!("Committing {} staged writes", staged.len());
        for write in staged {
            let category = match write {
                StagedWrite::Insert(c) | StagedWrite::Update(c) => c,
            };
            state.committed.insert(category.id(), category);
        }
        Ok(())
    }
}
