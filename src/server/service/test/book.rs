use super::*;
use crate::server::{
    model::book::{BookFields, CreateBookParam, UpdateBookParam},
    service::{book::BookService, review::ReviewService},
};

fn fields(category_ids: Vec<i32>) -> BookFields {
    BookFields {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn_number: None,
        img_url: None,
        category_ids,
    }
}

/// Tests the create then retrieve round trip through categories.
///
/// Expected: Ok with the retrieved categories equal to the requested ones
#[tokio::test]
async fn create_links_requested_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let c1 = factory::create_category(db).await?;
    let c2 = factory::create_category(db).await?;

    let service = BookService::new(db);
    let created = service
        .create(CreateBookParam {
            user_id: user.id,
            fields: fields(vec![c1.id, c2.id]),
        })
        .await?;

    let book = service.get_by_id(created.id).await?;
    let ids: Vec<i32> = book.categories.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![c1.id, c2.id]);
    assert!(book.is_owned_by(Some(user.id)));

    Ok(())
}

/// Tests that an unknown category rejects the whole create.
///
/// Expected: Err(ValidationErr) naming the ID, and no book stored
#[tokio::test]
async fn create_rejects_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookService::new(db)
        .create(CreateBookParam {
            user_id: user.id,
            fields: fields(vec![42]),
        })
        .await;

    let Err(AppError::ValidationErr(errors)) = result else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.field("categories"),
        Some(&["Invalid pk \"42\" - object does not exist.".to_string()][..])
    );
    assert_eq!(entity::prelude::Book::find().count(db).await?, 0);

    Ok(())
}

/// Tests replacing the category set of an owned book.
///
/// Expected: Ok with categories changed from {c1, c2} to {c2, c3}
#[tokio::test]
async fn update_replaces_category_set() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let c1 = factory::create_category(db).await?;
    let c2 = factory::create_category(db).await?;
    let c3 = factory::create_category(db).await?;
    factory::create_book_category(db, book.id, c1.id).await?;
    factory::create_book_category(db, book.id, c2.id).await?;

    let service = BookService::new(db);
    service
        .update(
            user.id,
            UpdateBookParam {
                id: book.id,
                fields: fields(vec![c2.id, c3.id]),
            },
        )
        .await?;

    let updated = service.get_by_id(book.id).await?;
    let ids: Vec<i32> = updated.categories.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![c2.id, c3.id]);

    Ok(())
}

/// Tests that a non-owner cannot update a book.
///
/// Expected: Err(AccessDenied) with the stored book unchanged
#[tokio::test]
async fn update_denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = BookService::new(db);
    let result = service
        .update(
            stranger.id,
            UpdateBookParam {
                id: book.id,
                fields: BookFields {
                    title: "Hijacked".to_string(),
                    ..fields(vec![])
                },
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.get_by_id(book.id).await?.title, book.title);

    Ok(())
}

/// Tests that an unknown category rolls back the whole update.
///
/// Expected: Err(ValidationErr) with title and links unchanged
#[tokio::test]
async fn failed_update_leaves_book_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let category = factory::create_category(db).await?;
    factory::create_book_category(db, book.id, category.id).await?;

    let service = BookService::new(db);
    let result = service
        .update(
            user.id,
            UpdateBookParam {
                id: book.id,
                fields: BookFields {
                    title: "Renamed".to_string(),
                    ..fields(vec![999])
                },
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
    let stored = service.get_by_id(book.id).await?;
    assert_eq!(stored.title, book.title);
    assert_eq!(stored.categories.len(), 1);
    assert_eq!(stored.categories[0].id, category.id);

    Ok(())
}

/// Tests updating a book that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_fails_for_missing_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookService::new(db)
        .update(
            user.id,
            UpdateBookParam {
                id: 999,
                fields: fields(vec![]),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting a book removes its reviews.
///
/// Expected: Ok, then NotFound for both the book and its review
#[tokio::test]
async fn delete_cascades_to_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let service = BookService::new(db);
    service.delete(user.id, book.id).await?;

    assert!(matches!(
        service.get_by_id(book.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        ReviewService::new(db).get_by_id(review.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a non-owner cannot delete a book.
///
/// Expected: Err(AccessDenied) with the book still present
#[tokio::test]
async fn delete_denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = BookService::new(db);
    let result = service.delete(stranger.id, book.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(service.get_by_id(book.id).await.is_ok());

    Ok(())
}

/// Tests the ownership pre-check used before payload validation.
///
/// Expected: NotFound for a missing book, AccessDenied for a foreign one
#[tokio::test]
async fn get_owned_checks_existence_then_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, book) = factory::helpers::create_book_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = BookService::new(db);

    assert!(matches!(
        service.get_owned(stranger.id, 999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_owned(stranger.id, book.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.get_owned(owner.id, book.id).await?.id, book.id);

    Ok(())
}
