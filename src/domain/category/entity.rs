use super::errors::DomainError;
use super::validation;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const NAME_MIN_LENGTH: u64 = 3;
pub const NAME_MAX_LENGTH: u64 = 255;
pub const DESCRIPTION_MAX_LENGTH: u64 = 10_000;

/// Catalog category, the aggregate root that owns its own field rules.
///
/// # Invariants
/// - `name` is not blank and is 3 to 255 characters long
/// - `description` is present (possibly empty) and at most 10000 characters long
/// - `id` and `created_at` are assigned once at construction and never change
///
/// Rules are checked in a fixed order and the first violation is reported,
/// both on construction and on [`Category::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Creates an active category.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new_with_status(name, description, true)
    }

    pub fn new_with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        Self::from_nullable(Some(name.into()), Some(description.into()), is_active)
    }

    /// Creates a category from boundary values that may be absent.
    ///
    /// A missing name fails like a blank one; a missing description fails
    /// with "Description should not be null".
    pub fn from_nullable(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        Self::validate(name.as_deref(), description.as_deref())?;

        Ok(Self {
            id: Uuid::now_v7(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            is_active,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Replaces the name and, when given, the description.
    ///
    /// Both values are validated before anything is written, so a failed
    /// update leaves the category untouched.
    pub fn update(&mut self, name: &str, description: Option<&str>) -> Result<(), DomainError> {
        let description = description.unwrap_or(&self.description);
        Self::validate(Some(name), Some(description))?;

        let description = description.to_owned();
        self.name = name.to_owned();
        self.description = description;
        Ok(())
    }

    fn validate(name: Option<&str>, description: Option<&str>) -> Result<(), DomainError> {
        validation::not_null_or_empty(name, "Name")?;
        let name = name.unwrap_or_default();
        validation::min_length(name, NAME_MIN_LENGTH, "Name")?;
        validation::max_length(name, NAME_MAX_LENGTH, "Name")?;

        validation::not_null(description, "Description")?;
        let description = description.unwrap_or_default();
        validation::max_length(description, DESCRIPTION_MAX_LENGTH, "Description")?;
        Ok(())
    }
}
