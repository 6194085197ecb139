//! Review factory for creating test review entities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    book_id: i32,
    user_id: i32,
    rating: i32,
    comment: String,
    date: NaiveDate,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - rating: `4`
    /// - comment: `"Great read"`
    /// - date: today (UTC)
    pub fn new(db: &'a DatabaseConnection, book_id: i32, user_id: i32) -> Self {
        Self {
            db,
            book_id,
            user_id,
            rating: 4,
            comment: "Great read".to_string(),
            date: Utc::now().date_naive(),
        }
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            book_id: ActiveValue::Set(self.book_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    book_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, book_id, user_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_review_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, book, review) =
            factory::helpers::create_review_with_dependencies(db).await?;

        assert_eq!(review.book_id, book.id);
        assert_eq!(review.user_id, user.id);
        assert_eq!(review.rating, 4);

        Ok(())
    }
}
