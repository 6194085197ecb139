//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of domain conversions and DTO mapping.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let book = fixture::book::entity();
//! let review = fixture::review::entity_builder().user_id(7).build();
//! ```

pub mod book;
pub mod category;
pub mod review;

pub use book::{entity as book_entity, entity_builder as book_entity_builder};
pub use category::entity as category_entity;
pub use review::{entity as review_entity, entity_builder as review_entity_builder};
