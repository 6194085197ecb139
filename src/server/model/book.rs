//! Book domain models and parameters.
//!
//! A `Book` always carries its expanded category list. Ownership is kept as the owning
//! user's id so the per-request `is_owner` flag can be computed when converting to a DTO;
//! it is never stored.

use crate::{
    model::book::{BookDto, CreateBookDto, UpdateBookDto},
    server::{
        error::validation::ValidationErrors, model::category::Category, util::validate,
    },
};

/// Maximum length of a title or author.
pub const TEXT_MAX_LEN: usize = 200;

/// Maximum length of an ISBN number.
pub const ISBN_MAX_LEN: usize = 13;

/// Book with its expanded categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    /// Id of the user who created the book.
    pub user_id: i32,
    pub title: String,
    pub author: String,
    pub isbn_number: Option<String>,
    pub img_url: Option<String>,
    /// Categories currently linked to the book, ordered by category id.
    pub categories: Vec<Category>,
}

impl Book {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The book row
    /// - `categories` - Category rows linked to the book
    pub fn from_entity(
        entity: entity::book::Model,
        categories: Vec<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            author: entity.author,
            isbn_number: entity.isbn_number,
            img_url: entity.img_url,
            categories: categories.into_iter().map(Category::from_entity).collect(),
        }
    }

    /// Whether `requester` created this book. Anonymous requesters never own anything.
    pub fn is_owned_by(&self, requester: Option<i32>) -> bool {
        requester == Some(self.user_id)
    }

    /// Converts the domain model to a DTO for the given requester.
    ///
    /// # Arguments
    /// - `requester` - Id of the user making the request, `None` when anonymous
    pub fn into_dto(self, requester: Option<i32>) -> BookDto {
        BookDto {
            is_owner: self.is_owned_by(requester),
            id: self.id,
            title: self.title,
            author: self.author,
            isbn_number: self.isbn_number,
            img_url: self.img_url,
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
        }
    }
}

/// Validated book fields shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn_number: Option<String>,
    pub img_url: Option<String>,
    /// Exact category set the book should end up with, without duplicates.
    pub category_ids: Vec<i32>,
}

impl BookFields {
    fn validate(
        title: Option<String>,
        author: Option<String>,
        isbn_number: Option<String>,
        img_url: Option<String>,
        categories: Option<Vec<i32>>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = validate::required_text(&mut errors, "title", title, TEXT_MAX_LEN);
        let author = validate::required_text(&mut errors, "author", author, TEXT_MAX_LEN);
        let isbn_number =
            validate::optional_text(&mut errors, "isbn_number", isbn_number, ISBN_MAX_LEN);
        let img_url = validate::optional_url(&mut errors, "img_url", img_url);
        let category_ids = validate::dedup_ids(categories.unwrap_or_default());

        match (title, author) {
            (Some(title), Some(author)) if errors.is_empty() => Ok(Self {
                title,
                author,
                isbn_number,
                img_url,
                category_ids,
            }),
            _ => Err(errors),
        }
    }
}

/// Parameters for creating a book.
#[derive(Debug, Clone)]
pub struct CreateBookParam {
    /// Id of the requesting user, who becomes the owner.
    pub user_id: i32,
    pub fields: BookFields,
}

impl CreateBookParam {
    /// Validates a create payload on behalf of `user_id`.
    ///
    /// # Returns
    /// - `Ok(CreateBookParam)` - Payload is well formed
    /// - `Err(ValidationErrors)` - Messages keyed by field name
    pub fn from_dto(user_id: i32, dto: CreateBookDto) -> Result<Self, ValidationErrors> {
        let fields = BookFields::validate(
            dto.title,
            dto.author,
            dto.isbn_number,
            dto.img_url,
            dto.categories,
        )?;

        Ok(Self { user_id, fields })
    }
}

/// Parameters for replacing a book's fields and categories.
#[derive(Debug, Clone)]
pub struct UpdateBookParam {
    /// Id of the book to update.
    pub id: i32,
    pub fields: BookFields,
}

impl UpdateBookParam {
    /// Validates an update payload for book `id`.
    ///
    /// # Returns
    /// - `Ok(UpdateBookParam)` - Payload is well formed
    /// - `Err(ValidationErrors)` - Messages keyed by field name
    pub fn from_dto(id: i32, dto: UpdateBookDto) -> Result<Self, ValidationErrors> {
        let fields = BookFields::validate(
            dto.title,
            dto.author,
            dto.isbn_number,
            dto.img_url,
            dto.categories,
        )?;

        Ok(Self { id, fields })
    }
}
