use super::*;

/// Tests that anonymous requesters resolve to no user instead of an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_is_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a logged-in requester is returned.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn logged_in_is_some() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).optional().await?;

    assert_eq!(resolved.map(|u| u.id), Some(user.id));

    Ok(())
}
