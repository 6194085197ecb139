//! Book business logic.
//!
//! Every write runs inside a single database transaction: the existence and ownership
//! checks, the category existence check and the multi-table write either all take effect
//! or none do. Dropping an uncommitted `DatabaseTransaction` rolls it back, so any `?`
//! before `commit` leaves the store unchanged.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{book::BookRepository, category::CategoryRepository},
    error::{auth::AuthError, validation::ValidationErrors, AppError},
    model::book::{Book, CreateBookParam, UpdateBookParam},
};

/// Field name under which unknown category IDs are reported.
const CATEGORIES_FIELD: &str = "categories";

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all books ordered by ID with their categories.
    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).get_all().await?)
    }

    /// Gets a book by ID.
    ///
    /// # Returns
    /// - `Ok(Book)` - The book with its categories
    /// - `Err(AppError::NotFound)` - No book with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Book, AppError> {
        find_book(self.db, id).await
    }

    /// Gets a book that `user_id` is allowed to modify.
    ///
    /// Lets callers reject unknown or foreign books before looking at a payload.
    ///
    /// # Returns
    /// - `Ok(Book)` - The book, owned by `user_id`
    /// - `Err(AppError::NotFound)` - No book with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - The book belongs to another user
    pub async fn get_owned(&self, user_id: i32, id: i32) -> Result<Book, AppError> {
        find_owned_book(self.db, user_id, id, "modify").await
    }

    /// Creates a book owned by `param.user_id` together with its category links.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book with its categories
    /// - `Err(AppError::ValidationErr)` - A category ID does not exist
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn create(&self, param: CreateBookParam) -> Result<Book, AppError> {
        let txn = self.db.begin().await?;

        ensure_categories_exist(&txn, &param.fields.category_ids).await?;

        let book = BookRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!("User {} created book {}", book.user_id, book.id);

        Ok(book)
    }

    /// Replaces a book's fields and category set on behalf of `user_id`.
    ///
    /// # Returns
    /// - `Ok(Book)` - The updated book with its categories
    /// - `Err(AppError::NotFound)` - No book with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user_id` does not own the book
    /// - `Err(AppError::ValidationErr)` - A category ID does not exist
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn update(&self, user_id: i32, param: UpdateBookParam) -> Result<Book, AppError> {
        let txn = self.db.begin().await?;

        find_owned_book(&txn, user_id, param.id, "update").await?;
        ensure_categories_exist(&txn, &param.fields.category_ids).await?;

        let book = BookRepository::new(&txn).update(param).await?;

        txn.commit().await?;

        tracing::info!("User {} updated book {}", user_id, book.id);

        Ok(book)
    }

    /// Deletes a book with its reviews and category links on behalf of `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Book and dependents deleted
    /// - `Err(AppError::NotFound)` - No book with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user_id` does not own the book
    /// - `Err(AppError::DbErr)` - Database error, nothing was deleted
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        find_owned_book(&txn, user_id, id, "delete").await?;

        BookRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("User {} deleted book {}", user_id, id);

        Ok(())
    }
}

async fn find_book<C: ConnectionTrait>(db: &C, id: i32) -> Result<Book, AppError> {
    BookRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
}

async fn find_owned_book<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    id: i32,
    action: &str,
) -> Result<Book, AppError> {
    let book = find_book(db, id).await?;

    if !book.is_owned_by(Some(user_id)) {
        return Err(AuthError::AccessDenied(
            user_id,
            format!("attempted to {} book {} owned by user {}", action, id, book.user_id),
        )
        .into());
    }

    Ok(book)
}

async fn ensure_categories_exist<C: ConnectionTrait>(
    db: &C,
    category_ids: &[i32],
) -> Result<(), AppError> {
    let missing = CategoryRepository::new(db).find_missing(category_ids).await?;

    let mut errors = ValidationErrors::new();
    for id in missing {
        errors.add(
            CATEGORIES_FIELD,
            format!("Invalid pk \"{}\" - object does not exist.", id),
        );
    }

    Ok(errors.into_result(())?)
}
