use super::*;
use crate::server::{
    data::book::BookRepository,
    model::book::{BookFields, CreateBookParam, UpdateBookParam},
};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;

fn fields(title: &str, category_ids: Vec<i32>) -> BookFields {
    BookFields {
        title: title.to_string(),
        author: "Herbert".to_string(),
        isbn_number: None,
        img_url: None,
        category_ids,
    }
}
