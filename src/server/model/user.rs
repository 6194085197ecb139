//! User domain models and parameters.
//!
//! Users are external identities: the backend only records a unique username so that
//! books and reviews can be attributed to their creator.

use crate::{
    model::user::{LoginDto, UserDto},
    server::{error::validation::ValidationErrors, util::validate},
};

/// Maximum length of a username.
pub const USERNAME_MAX_LEN: usize = 150;

/// An identity that can own books and reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Parameters for logging in as a user.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
}

impl LoginParam {
    /// Validates a login payload. Surrounding whitespace is not part of the username.
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = validate::required_text(
            &mut errors,
            "username",
            dto.username.map(|u| u.trim().to_string()),
            USERNAME_MAX_LEN,
        );

        match username {
            Some(username) if errors.is_empty() => Ok(Self { username }),
            _ => Err(errors),
        }
    }
}
