use super::*;

/// Tests reviewing a book.
///
/// Expected: 201 with ids for book and user, today's date and `is_owner` true
#[tokio::test]
async fn create_review_for_existing_book() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, book) = factory::helpers::create_book_with_owner(db).await.unwrap();
    let cookie = login(&app, "reader").await;

    let response = send(
        &app,
        Method::POST,
        "/api/reviews",
        Some(&cookie),
        Some(json!({ "book_id": book.id, "rating": 4, "comment": "Dense but great" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let review = body_json(response).await;
    assert_eq!(review["book"], book.id);
    assert!(review["user"].is_number());
    assert_eq!(review["rating"], 4);
    assert_eq!(review["is_owner"], true);
    assert_eq!(
        review["date"],
        chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

/// Tests reviewing a missing book.
///
/// Expected: 404
#[tokio::test]
async fn create_review_for_missing_book_is_not_found() {
    let (_test, app) = setup().await;
    let cookie = login(&app, "reader").await;

    let response = send(
        &app,
        Method::POST,
        "/api/reviews",
        Some(&cookie),
        Some(json!({ "book_id": 999, "rating": 4, "comment": "Ghost" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests malformed review payloads.
///
/// Expected: 400 for a negative rating and for a missing comment
#[tokio::test]
async fn create_review_rejects_invalid_payload() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, book) = factory::helpers::create_book_with_owner(db).await.unwrap();
    let cookie = login(&app, "reader").await;

    for body in [
        json!({ "book_id": book.id, "rating": -1, "comment": "Bad" }),
        json!({ "book_id": book.id, "rating": 3 }),
    ] {
        let response = send(&app, Method::POST, "/api/reviews", Some(&cookie), Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// Tests that only the author can delete a review.
///
/// Expected: 403 for another user with the review kept, then 204 for the author
#[tokio::test]
async fn only_author_deletes_review() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, book) = factory::helpers::create_book_with_owner(db).await.unwrap();
    let author = login(&app, "author").await;
    let other = login(&app, "other").await;

    let review = body_json(
        send(
            &app,
            Method::POST,
            "/api/reviews",
            Some(&author),
            Some(json!({ "book_id": book.id, "rating": 2, "comment": "Meh" })),
        )
        .await,
    )
    .await;
    let uri = format!("/api/reviews/{}", review["id"]);

    let response = send(&app, Method::DELETE, &uri, Some(&other), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let kept = body_json(send(&app, Method::GET, &uri, Some(&other), None).await).await;
    assert_eq!(kept["comment"], "Meh");
    assert_eq!(kept["is_owner"], false);

    let response = send(&app, Method::DELETE, &uri, Some(&author), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Tests retrieving a review that does not exist.
///
/// Expected: 404 with an empty body
#[tokio::test]
async fn get_missing_review_is_not_found() {
    let (_test, app) = setup().await;

    let response = send(&app, Method::GET, "/api/reviews/999", None, None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}
