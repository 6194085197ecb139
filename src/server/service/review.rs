use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{book::BookRepository, review::ReviewRepository},
    error::{auth::AuthError, AppError},
    model::review::{CreateReviewParam, Review},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all reviews ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }

    /// Gets a review by ID, failing with `NotFound` if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))
    }

    /// Creates a review dated today
    ///
    /// Fails with `NotFound` when the reviewed book doesn't exist; nothing is inserted.
    /// The book lookup and the insert share one transaction.
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, AppError> {
        let txn = self.db.begin().await?;

        if BookRepository::new(&txn)
            .find_by_id(param.book_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Book {} not found for review",
                param.book_id
            )));
        }

        let review = ReviewRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} reviewed book {} (review {})",
            review.user_id,
            review.book_id,
            review.id
        );

        Ok(review)
    }

    /// Deletes a review written by `user_id`
    ///
    /// Fails with `NotFound` if the review doesn't exist and `AccessDenied` if another
    /// user wrote it.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let review = ReviewRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))?;

        if !review.is_owned_by(Some(user_id)) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "attempted to delete review {} owned by user {}",
                    id, review.user_id
                ),
            )
            .into());
        }

        ReviewRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("User {} deleted review {}", user_id, id);

        Ok(())
    }
}
