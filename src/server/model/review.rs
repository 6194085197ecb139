//! Review domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{error::validation::ValidationErrors, util::validate},
};

/// Maximum length of a review comment.
pub const COMMENT_MAX_LEN: usize = 1000;

/// A user's rating and comment on a book.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub book_id: i32,
    /// Id of the user who wrote the review.
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
    /// Creation date, never changed afterwards.
    pub date: NaiveDate,
}

impl Review {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            book_id: entity.book_id,
            user_id: entity.user_id,
            rating: entity.rating,
            comment: entity.comment,
            date: entity.date,
        }
    }

    /// Whether `requester` wrote this review.
    pub fn is_owned_by(&self, requester: Option<i32>) -> bool {
        requester == Some(self.user_id)
    }

    /// Converts the domain model to a DTO for the given requester.
    pub fn into_dto(self, requester: Option<i32>) -> ReviewDto {
        ReviewDto {
            is_owner: self.is_owned_by(requester),
            id: self.id,
            book: self.book_id,
            user: self.user_id,
            rating: self.rating,
            comment: self.comment,
            date: self.date,
        }
    }
}

/// Parameters for creating a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub book_id: i32,
    /// Id of the requesting user, who becomes the owner.
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParam {
    /// Validates a create payload on behalf of `user_id`.
    ///
    /// Only the payload shape is checked here; whether `book_id` names an existing
    /// book is decided by the service.
    pub fn from_dto(user_id: i32, dto: CreateReviewDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if dto.book_id.is_none() {
            errors.add("book_id", validate::REQUIRED);
        }
        let rating = validate::non_negative_int(&mut errors, "rating", dto.rating);
        let comment =
            validate::required_text(&mut errors, "comment", dto.comment, COMMENT_MAX_LEN);

        match (dto.book_id, rating, comment) {
            (Some(book_id), Some(rating), Some(comment)) if errors.is_empty() => Ok(Self {
                book_id,
                user_id,
                rating,
                comment,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn dto_uses_ids_for_book_and_user() {
        let review = Review::from_entity(
            fixture::review_entity_builder()
                .book_id(4)
                .user_id(9)
                .build(),
        );

        let dto = review.into_dto(Some(9));

        assert_eq!(dto.book, 4);
        assert_eq!(dto.user, 9);
        assert!(dto.is_owner);
    }

    #[test]
    fn anonymous_requester_is_not_owner() {
        let review = Review::from_entity(fixture::review_entity());

        assert!(!review.into_dto(None).is_owner);
    }

    #[test]
    fn date_serializes_as_calendar_date() {
        let review = Review::from_entity(fixture::review_entity());

        let json = serde_json::to_value(review.into_dto(None)).unwrap();

        assert_eq!(json["date"], "2026-01-04");
    }

    #[test]
    fn rejects_missing_and_invalid_fields() {
        let errors = CreateReviewParam::from_dto(
            1,
            CreateReviewDto {
                book_id: None,
                rating: Some(-1),
                comment: Some(String::new()),
            },
        )
        .unwrap_err();

        assert!(errors.field("book_id").is_some());
        assert!(errors.field("rating").is_some());
        assert!(errors.field("comment").is_some());
    }

    #[test]
    fn accepts_zero_rating() {
        let param = CreateReviewParam::from_dto(
            2,
            CreateReviewDto {
                book_id: Some(1),
                rating: Some(0),
                comment: Some("Not for me".to_string()),
            },
        )
        .unwrap();

        assert_eq!(param.rating, 0);
        assert_eq!(param.user_id, 2);
    }
}
