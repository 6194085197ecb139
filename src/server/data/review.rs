//! Review data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParam, Review};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all reviews ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Creates a review dated today.
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            book_id: ActiveValue::Set(param.book_id),
            user_id: ActiveValue::Set(param.user_id),
            rating: ActiveValue::Set(param.rating),
            comment: ActiveValue::Set(param.comment),
            date: ActiveValue::Set(Utc::now().date_naive()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Deletes a review, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every review of `book_id`, returning the number of rows removed.
    pub async fn delete_by_book(&self, book_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Review::delete_many()
            .filter(entity::review::Column::BookId.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
