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
        book::{BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::book::{CreateBookParam, UpdateBookParam},
        service::book::BookService,
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// List all books.
///
/// Returns every book ordered by ID with its categories expanded. Anonymous requests
/// are allowed; `is_owner` is only ever true for the logged-in creator.
///
/// # Returns
/// - `200 OK` - List of books
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &session).optional().await?;
    let requester_id = requester.map(|u| u.id);

    let books = BookService::new(&state.db).get_all().await?;

    let dtos: Vec<BookDto> = books
        .into_iter()
        .map(|book| book.into_dto(requester_id))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a book by ID.
///
/// # Returns
/// - `200 OK` - The book
/// - `404 Not Found` - No book with that ID, empty body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &session).optional().await?;
    let Path(id) = path?;

    let book = BookService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(book.into_dto(requester.map(|u| u.id)))))
}

/// Create a book.
///
/// The logged-in user becomes the owner. The book is linked to exactly the given
/// categories; an omitted list means none.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - The created book
/// - `400 Bad Request` - Malformed body or invalid fields, including unknown categories
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created book", body = BookDto),
        (status = 400, description = "Invalid book data, reported per field"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Json(payload) = payload?;

    let params = CreateBookParam::from_dto(user.id, payload)?;

    let book = BookService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(book.into_dto(Some(user.id)))))
}

/// Replace a book's fields and categories.
///
/// Served for both PUT and PATCH. Every field is replaced, and the category set becomes
/// exactly the given list (omitted means none). Existence and ownership are checked
/// before the payload is looked at.
///
/// # Access Control
/// - Owner of the book only
///
/// # Returns
/// - `204 No Content` - Book updated
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Book belongs to another user, empty body
/// - `404 Not Found` - No book with that ID, empty body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    method(put, patch),
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 204, description = "Successfully updated book"),
        (status = 400, description = "Invalid book data, reported per field"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Book belongs to another user"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Path(id) = path?;

    let service = BookService::new(&state.db);
    service.get_owned(user.id, id).await?;

    let Json(payload) = payload?;
    let params = UpdateBookParam::from_dto(id, payload)?;

    service.update(user.id, params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book together with its reviews and category links.
///
/// # Access Control
/// - Owner of the book only
///
/// # Returns
/// - `204 No Content` - Book deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Book belongs to another user, empty body
/// - `404 Not Found` - No book with that ID, empty body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted book"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Book belongs to another user"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Path(id) = path?;

    BookService::new(&state.db).delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
