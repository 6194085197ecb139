//! Book/category link factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a book to a category, dated today.
///
/// # Returns
/// - `Ok(entity::book_category::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert (e.g. unknown book or category)
pub async fn create_book_category(
    db: &DatabaseConnection,
    book_id: i32,
    category_id: i32,
) -> Result<entity::book_category::Model, DbErr> {
    entity::book_category::ActiveModel {
        book_id: ActiveValue::Set(book_id),
        category_id: ActiveValue::Set(category_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        ..Default::default()
    }
    .insert(db)
    .await
}
