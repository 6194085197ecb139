//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a book together with the user that owns it.
///
/// # Returns
/// - `Ok((user, book))` - The owner and the created book
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::book::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let book = crate::factory::book::create_book(db, user.id).await?;

    Ok((user, book))
}

/// Creates a complete review hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (owns both the book and the review)
/// 2. Book
/// 3. Review
///
/// # Returns
/// - `Ok((user, book, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::book::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let (user, book) = create_book_with_owner(db).await?;
    let review = crate::factory::review::create_review(db, book.id, user.id).await?;

    Ok((user, book, review))
}
