use super::*;

/// Tests deleting a book with reviews and category links.
///
/// Expected: Ok(true) with the book, its reviews and its links gone and the
/// category itself kept
#[tokio::test]
async fn deletes_book_reviews_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book, _) = factory::helpers::create_review_with_dependencies(db).await?;
    let category = factory::create_category(db).await?;
    factory::create_book_category(db, book.id, category.id).await?;

    let deleted = BookRepository::new(db).delete(book.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Book::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::BookCategory::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a book that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = BookRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
