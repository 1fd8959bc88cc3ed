use serde::Deserialize;
use uuid::Uuid;

/// Request to rename a category and optionally change its description and
/// activation state. `None` fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryInput {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
