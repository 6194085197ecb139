use super::*;

/// Tests replacing a book's fields and categories.
///
/// Expected: Ok with new values, the same owner and only the requested categories
#[tokio::test]
async fn replaces_fields_and_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, book) = factory::helpers::create_book_with_owner(db).await?;
    let old = factory::create_category(db).await?;
    let new = factory::create_category(db).await?;
    factory::create_book_category(db, book.id, old.id).await?;

    let updated = BookRepository::new(db)
        .update(UpdateBookParam {
            id: book.id,
            fields: BookFields {
                img_url: Some("https://example.com/cover.png".to_string()),
                ..fields("Children of Dune", vec![new.id])
            },
        })
        .await?;

    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.title, "Children of Dune");
    assert_eq!(
        updated.img_url.as_deref(),
        Some("https://example.com/cover.png")
    );
    let ids: Vec<i32> = updated.categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![new.id]);

    Ok(())
}

/// Tests updating a book that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookRepository::new(db)
        .update(UpdateBookParam {
            id: 999,
            fields: fields("Ghost", vec![]),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
