use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::review::CreateReviewParam,
        service::review::ReviewService, state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// List all reviews ordered by ID.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let requester_id = AuthGuard::new(&state.db, &session)
        .optional()
        .await?
        .map(|u| u.id);

    let reviews = ReviewService::new(&state.db).get_all().await?;

    let dtos: Vec<ReviewDto> = reviews
        .into_iter()
        .map(|review| review.into_dto(requester_id))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a review by ID.
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let requester_id = AuthGuard::new(&state.db, &session)
        .optional()
        .await?
        .map(|u| u.id);
    let Path(id) = path?;

    let review = ReviewService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(review.into_dto(requester_id))))
}

/// Review a book.
///
/// The logged-in user becomes the owner and the review is dated today.
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Malformed body, missing fields, negative rating or bad comment
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The reviewed book does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Invalid review data, reported per field"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Json(payload) = payload?;

    let params = CreateReviewParam::from_dto(user.id, payload)?;

    let review = ReviewService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto(Some(user.id)))))
}

/// Delete a review.
///
/// # Access Control
/// - Author of the review only
///
/// # Returns
/// - `204 No Content` - Review deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Review belongs to another user, empty body
/// - `404 Not Found` - No review with that ID, empty body
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted review"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Review belongs to another user"),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Path(id) = path?;

    ReviewService::new(&state.db).delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
