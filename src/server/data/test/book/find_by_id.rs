use super::*;

/// Tests fetching a book with one linked category.
///
/// Expected: Ok(Some) with the category expanded
#[tokio::test]
async fn returns_book_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let category = factory::create_category(db).await?;
    factory::create_book_category(db, book.id, category.id).await?;

    let found = BookRepository::new(db).find_by_id(book.id).await?.unwrap();

    assert_eq!(found.id, book.id);
    assert_eq!(found.categories.len(), 1);
    assert_eq!(found.categories[0].id, category.id);

    Ok(())
}

/// Tests fetching a book that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = BookRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
