use super::*;

/// Tests listing books with their categories.
///
/// Expected: Ok with books in ID order, each carrying only its own categories
#[tokio::test]
async fn lists_books_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_book_with_owner(db).await?;
    let second = factory::create_book(db, user.id).await?;
    let category = factory::create_category(db).await?;
    factory::create_book_category(db, second.id, category.id).await?;

    let books = BookRepository::new(db).get_all().await?;

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, first.id);
    assert!(books[0].categories.is_empty());
    assert_eq!(books[1].id, second.id);
    assert_eq!(books[1].categories.len(), 1);

    Ok(())
}

/// Tests listing when no book exists.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let books = BookRepository::new(db).get_all().await?;

    assert!(books.is_empty());

    Ok(())
}
