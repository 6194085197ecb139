//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation. Foreign keys are passed explicitly; `helpers` creates whole
//! dependency chains when the details don't matter to the test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let book = factory::book::create_book(&db, user.id).await?;
//!
//! let (owner, book, review) = factory::helpers::create_review_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db, user.id)
//!     .title("Dune")
//!     .author("Herbert")
//!     .isbn_number(Some("9780441013593"))
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod book_category;
pub mod category;
pub mod helpers;
pub mod review;
pub mod user;

pub use book::create_book;
pub use book_category::create_book_category;
pub use category::create_category;
pub use review::create_review;
pub use user::create_user;
