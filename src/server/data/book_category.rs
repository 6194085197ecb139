//! Repository for the links between books and categories.
//!
//! A link row records the day a category was attached to a book. Replacing a book's
//! category set only inserts and deletes the links that actually changed, so a link that
//! survives an update keeps its original date.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct BookCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the linked categories of each of `book_ids`.
    ///
    /// Books without links are absent from the map. Each category list is ordered by
    /// category ID.
    ///
    /// # Returns
    /// - `Ok(HashMap<book_id, categories>)` - Linked categories per book
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_books(
        &self,
        book_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::category::Model>>, DbErr> {
        if book_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::BookCategory::find()
            .filter(entity::book_category::Column::BookId.is_in(book_ids.iter().copied()))
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::book_category::Column::CategoryId)
            .all(self.db)
            .await?;

        let mut categories: HashMap<i32, Vec<entity::category::Model>> = HashMap::new();
        for (link, category) in links {
            if let Some(category) = category {
                categories.entry(link.book_id).or_default().push(category);
            }
        }

        Ok(categories)
    }

    /// Makes `category_ids` the exact category set of `book_id`.
    ///
    /// Links to categories no longer listed are deleted, new ones are inserted with
    /// today's date and links present on both sides are left untouched. `category_ids`
    /// must not contain duplicates.
    pub async fn set_for_book(&self, book_id: i32, category_ids: &[i32]) -> Result<(), DbErr> {
        let current: HashSet<i32> = entity::prelude::BookCategory::find()
            .filter(entity::book_category::Column::BookId.eq(book_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.category_id)
            .collect();
        let wanted: HashSet<i32> = category_ids.iter().copied().collect();

        let removed: Vec<i32> = current.difference(&wanted).copied().collect();
        if !removed.is_empty() {
            entity::prelude::BookCategory::delete_many()
                .filter(entity::book_category::Column::BookId.eq(book_id))
                .filter(entity::book_category::Column::CategoryId.is_in(removed))
                .exec(self.db)
                .await?;
        }

        let today = Utc::now().date_naive();
        let added: Vec<entity::book_category::ActiveModel> = category_ids
            .iter()
            .filter(|id| !current.contains(id))
            .map(|&category_id| entity::book_category::ActiveModel {
                book_id: ActiveValue::Set(book_id),
                category_id: ActiveValue::Set(category_id),
                date: ActiveValue::Set(today),
                ..Default::default()
            })
            .collect();
        if !added.is_empty() {
            entity::prelude::BookCategory::insert_many(added)
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    /// Deletes every link of `book_id`, returning the number of rows removed.
    pub async fn delete_for_book(&self, book_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BookCategory::delete_many()
            .filter(entity::book_category::Column::BookId.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
