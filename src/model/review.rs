use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    /// Id of the reviewed book.
    pub book: i32,
    /// Id of the user who wrote the review.
    pub user: i32,
    pub rating: i32,
    pub comment: String,
    pub date: NaiveDate,
    pub is_owner: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub book_id: Option<i32>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}
