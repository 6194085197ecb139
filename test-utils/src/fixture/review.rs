//! Review fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::review;

/// Default rating.
pub const DEFAULT_RATING: i32 = 5;

/// Default comment.
pub const DEFAULT_COMMENT: &str = "A classic";

/// Creates a review entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - book_id: `1`
/// - user_id: `1`
/// - rating: `5`
/// - comment: `"A classic"`
/// - date: `2026-01-04`
pub fn entity() -> review::Model {
    entity_builder().build()
}

/// Creates a review entity builder for customization.
pub fn entity_builder() -> ReviewEntityBuilder {
    ReviewEntityBuilder::default()
}

/// Builder for creating customized review entity models.
pub struct ReviewEntityBuilder {
    id: i32,
    book_id: i32,
    user_id: i32,
    rating: i32,
    comment: String,
    date: NaiveDate,
}

impl Default for ReviewEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            book_id: 1,
            user_id: 1,
            rating: DEFAULT_RATING,
            comment: DEFAULT_COMMENT.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap_or_default(),
        }
    }
}

impl ReviewEntityBuilder {
    /// Sets the review ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the reviewed book ID.
    pub fn book_id(mut self, book_id: i32) -> Self {
        self.book_id = book_id;
        self
    }

    /// Sets the owning user ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Builds the review entity model.
    pub fn build(self) -> review::Model {
        review::Model {
            id: self.id,
            book_id: self.book_id,
            user_id: self.user_id,
            rating: self.rating,
            comment: self.comment,
            date: self.date,
        }
    }
}
