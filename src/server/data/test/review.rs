use super::*;
use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParam};

/// Tests creating a review.
///
/// Expected: Ok with today's date and the given fields
#[tokio::test]
async fn create_dates_review_today() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;

    let review = ReviewRepository::new(db)
        .create(CreateReviewParam {
            book_id: book.id,
            user_id: user.id,
            rating: 4,
            comment: "Worth it".to_string(),
        })
        .await?;

    assert_eq!(review.book_id, book.id);
    assert_eq!(review.user_id, user.id);
    assert_eq!(review.rating, 4);
    assert_eq!(review.date, chrono::Utc::now().date_naive());

    Ok(())
}

/// Tests that a review for a book that does not exist is rejected by the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn create_fails_for_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ReviewRepository::new(db)
        .create(CreateReviewParam {
            book_id: 999,
            user_id: user.id,
            rating: 1,
            comment: "Missing".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests listing reviews.
///
/// Expected: Ok with reviews ordered by ID
#[tokio::test]
async fn get_all_orders_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book, first) = factory::helpers::create_review_with_dependencies(db).await?;
    let second = factory::create_review(db, book.id, user.id).await?;

    let reviews = ReviewRepository::new(db).get_all().await?;
    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests deleting only the reviews of one book.
///
/// Expected: Ok(1) and the other book's review untouched
#[tokio::test]
async fn delete_by_book_leaves_other_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book, _) = factory::helpers::create_review_with_dependencies(db).await?;
    let other_book = factory::create_book(db, user.id).await?;
    let other_review = factory::create_review(db, other_book.id, user.id).await?;

    let removed = ReviewRepository::new(db).delete_by_book(book.id).await?;

    assert_eq!(removed, 1);
    let remaining = entity::prelude::Review::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other_review.id);

    Ok(())
}

/// Tests deleting a review that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_reports_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ReviewRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
