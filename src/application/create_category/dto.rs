use crate::application::common::dto::CategoryOutput;
use serde::Deserialize;

/// Request to create a category.
///
/// `name` and `description` may be absent or `null` on the wire; the entity
/// rejects them with its own messages. `is_active` defaults to `true`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateCategoryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

fn default_is_active() -> bool {
    true
}

pub type CreateCategoryOutput = CategoryOutput;
