//! Book factory for creating test book entities.
//!
//! Books always belong to a user, so the owning user's id is required when
//! constructing the factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db, user.id)
///     .title("Dune")
///     .author("Herbert")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    author: String,
    isbn_number: Option<String>,
    img_url: Option<String>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - isbn_number: `None`
    /// - img_url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user that owns the book
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            isbn_number: None,
            img_url: None,
        }
    }

    /// Sets the book title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the book author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the ISBN number.
    pub fn isbn_number(mut self, isbn_number: Option<&str>) -> Self {
        self.isbn_number = isbn_number.map(str::to_string);
        self
    }

    /// Sets the cover image URL.
    pub fn img_url(mut self, img_url: Option<&str>) -> Self {
        self.img_url = img_url.map(str::to_string);
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown user id)
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            isbn_number: ActiveValue::Set(self.isbn_number),
            img_url: ActiveValue::Set(self.img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values owned by `user_id`.
pub async fn create_book(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, user_id).build().await
}
