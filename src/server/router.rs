use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        book::{self, BOOK_TAG},
        category::{self, CATEGORY_TAG},
        review::{self, REVIEW_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Digest API", description = "Book catalogue with categories and reviews"),
    paths(
        book::get_books,
        book::get_book,
        book::create_book,
        book::update_book,
        book::delete_book,
        review::get_reviews,
        review::get_review,
        review::create_review,
        review::delete_review,
        category::get_categories,
        category::get_category,
        category::create_category,
        auth::login,
        auth::logout,
        auth::get_user,
    ),
    tags(
        (name = BOOK_TAG, description = "Books and their categories"),
        (name = REVIEW_TAG, description = "Reviews of books"),
        (name = CATEGORY_TAG, description = "Book categories"),
        (name = AUTH_TAG, description = "Session login and logout"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(book::get_books).post(book::create_book))
        .route(
            "/api/books/{id}",
            get(book::get_book)
                .put(book::update_book)
                .patch(book::update_book)
                .delete(book::delete_book),
        )
        .route(
            "/api/reviews",
            get(review::get_reviews).post(review::create_review),
        )
        .route(
            "/api/reviews/{id}",
            get(review::get_review).delete(review::delete_review),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route("/api/categories/{id}", get(category::get_category))
        .route("/api/auth/login", axum::routing::post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
