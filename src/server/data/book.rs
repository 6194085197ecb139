//! Book data repository for database operations.
//!
//! This module provides the `BookRepository` for managing book records together with
//! their category links. Books are always returned with their categories expanded.
//! Multi-step writes (create, update, delete) touch several tables and are expected to
//! run on a transaction opened by the caller.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    data::{book_category::BookCategoryRepository, review::ReviewRepository},
    model::book::{Book, CreateBookParam, UpdateBookParam},
};

/// Repository providing database operations for books.
pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all books ordered by ID with their categories.
    ///
    /// Categories for every book are loaded with a single additional query.
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)` - All books
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        let book_ids: Vec<i32> = entities.iter().map(|b| b.id).collect();
        let mut categories = BookCategoryRepository::new(self.db)
            .get_for_books(&book_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|book| {
                let linked = categories.remove(&book.id).unwrap_or_default();
                Book::from_entity(book, linked)
            })
            .collect())
    }

    /// Finds a book by ID with its categories.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - No book with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let Some(entity) = entity::prelude::Book::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let linked = BookCategoryRepository::new(self.db)
            .get_for_books(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(Book::from_entity(entity, linked)))
    }

    /// Creates a book and links it to its categories.
    ///
    /// Category IDs must already be known to exist; a dangling ID fails on the foreign key.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book with its categories
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBookParam) -> Result<Book, DbErr> {
        let fields = param.fields;

        let entity = entity::book::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(fields.title),
            author: ActiveValue::Set(fields.author),
            isbn_number: ActiveValue::Set(fields.isbn_number),
            img_url: ActiveValue::Set(fields.img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BookCategoryRepository::new(self.db)
            .set_for_book(entity.id, &fields.category_ids)
            .await?;

        self.reload(entity.id).await
    }

    /// Replaces a book's fields and category set. The owner never changes.
    ///
    /// # Returns
    /// - `Ok(Book)` - The updated book with its categories
    /// - `Err(DbErr::RecordNotUpdated)` - No book with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, param: UpdateBookParam) -> Result<Book, DbErr> {
        let fields = param.fields;

        entity::book::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            title: ActiveValue::Set(fields.title),
            author: ActiveValue::Set(fields.author),
            isbn_number: ActiveValue::Set(fields.isbn_number),
            img_url: ActiveValue::Set(fields.img_url),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        BookCategoryRepository::new(self.db)
            .set_for_book(param.id, &fields.category_ids)
            .await?;

        self.reload(param.id).await
    }

    /// Deletes a book after its reviews and category links.
    ///
    /// # Returns
    /// - `Ok(true)` - Book deleted
    /// - `Ok(false)` - No book with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        ReviewRepository::new(self.db).delete_by_book(id).await?;
        BookCategoryRepository::new(self.db)
            .delete_for_book(id)
            .await?;

        let result = entity::prelude::Book::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn reload(&self, id: i32) -> Result<Book, DbErr> {
        self.find_by_id(id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Book with id {} not found after write", id))
        })
    }
}
