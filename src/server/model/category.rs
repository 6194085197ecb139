//! Category domain models and parameters.

use crate::{
    model::category::{CategoryDto, CreateCategoryDto},
    server::{error::validation::ValidationErrors, util::validate},
};

/// Maximum length of a category name.
pub const NAME_MAX_LEN: usize = 255;

/// A tag grouping books.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParam {
    pub name: String,
}

impl CreateCategoryParam {
    /// Validates a create payload.
    ///
    /// # Returns
    /// - `Ok(CreateCategoryParam)` - Name present, not blank and within length
    /// - `Err(ValidationErrors)` - Messages keyed by `name`
    pub fn from_dto(dto: CreateCategoryDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate::required_text(&mut errors, "name", dto.name, NAME_MAX_LEN);

        match name {
            Some(name) if errors.is_empty() => Ok(Self { name }),
            _ => Err(errors),
        }
    }
}
