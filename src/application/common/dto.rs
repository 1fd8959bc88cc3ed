use crate::domain::category::entity::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a category returned by every category use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_owned(),
            description: category.description().to_owned(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}
