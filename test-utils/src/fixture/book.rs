//! Book fixtures for creating in-memory test data.

use entity::book;

/// Default test book title.
pub const DEFAULT_TITLE: &str = "Dune";

/// Default test book author.
pub const DEFAULT_AUTHOR: &str = "Herbert";

/// Default owning user id.
pub const DEFAULT_USER_ID: i32 = 1;

/// Creates a book entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - title: `"Dune"`
/// - author: `"Herbert"`
/// - isbn_number: `None`
/// - img_url: `None`
pub fn entity() -> book::Model {
    entity_builder().build()
}

/// Creates a book entity builder for customization.
pub fn entity_builder() -> BookEntityBuilder {
    BookEntityBuilder::default()
}

/// Builder for creating customized book entity models.
pub struct BookEntityBuilder {
    id: i32,
    user_id: i32,
    title: String,
    author: String,
    isbn_number: Option<String>,
    img_url: Option<String>,
}

impl Default for BookEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: DEFAULT_USER_ID,
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            isbn_number: None,
            img_url: None,
        }
    }
}

impl BookEntityBuilder {
    /// Sets the book ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning user ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
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

    /// Builds the book entity model.
    pub fn build(self) -> book::Model {
        book::Model {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            author: self.author,
            isbn_number: self.isbn_number,
            img_url: self.img_url,
        }
    }
}
