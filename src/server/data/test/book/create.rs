use super::*;

/// Tests creating a book with categories.
///
/// Expected: Ok with the owner set and the categories expanded
#[tokio::test]
async fn creates_book_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let book = BookRepository::new(db)
        .create(CreateBookParam {
            user_id: user.id,
            fields: BookFields {
                isbn_number: Some("9780441013593".to_string()),
                ..fields("Dune", vec![category.id])
            },
        })
        .await?;

    assert_eq!(book.user_id, user.id);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.isbn_number.as_deref(), Some("9780441013593"));
    assert_eq!(book.categories.len(), 1);
    assert_eq!(book.categories[0].name, category.name);

    Ok(())
}

/// Tests creating a book without categories.
///
/// Expected: Ok with an empty category list and no link rows
#[tokio::test]
async fn creates_book_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let book = BookRepository::new(db)
        .create(CreateBookParam {
            user_id: user.id,
            fields: fields("Dune", vec![]),
        })
        .await?;

    assert!(book.categories.is_empty());
    assert_eq!(entity::prelude::BookCategory::find().count(db).await?, 0);

    Ok(())
}
