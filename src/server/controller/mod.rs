//! HTTP request handlers.
//!
//! Controllers resolve the requester with `AuthGuard`, convert request DTOs into validated
//! parameter types, call a service and convert the returned domain model back into a DTO.
//! Each handler carries a `#[utoipa::path]` annotation collected into the OpenAPI document
//! by the router.

pub mod auth;
pub mod book;
pub mod category;
pub mod review;

#[cfg(test)]
mod test;
