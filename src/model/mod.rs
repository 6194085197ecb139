//! Wire types shared by every API endpoint.
//!
//! DTOs in this module are the JSON request and response bodies of the HTTP API. They
//! carry no behaviour: controllers convert them into validated parameter types on the way
//! in, and domain models convert into them on the way out.

pub mod api;
pub mod book;
pub mod category;
pub mod review;
pub mod user;
