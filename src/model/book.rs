use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn_number: Option<String>,
    pub img_url: Option<String>,
    /// Whether the requesting user created this book.
    pub is_owner: bool,
    pub categories: Vec<CategoryDto>,
}

/// Request body for creating a book.
///
/// Required fields are optional here so that missing values are reported per field
/// instead of as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn_number: Option<String>,
    pub img_url: Option<String>,
    /// Category ids the book belongs to. Omitted means none.
    pub categories: Option<Vec<i32>>,
}

/// Request body for replacing a book's fields and category set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn_number: Option<String>,
    pub img_url: Option<String>,
    /// Replacement category ids. Omitted clears every category.
    pub categories: Option<Vec<i32>>,
}
