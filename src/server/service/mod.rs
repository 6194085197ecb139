//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership rules and cross-entity checks such as category existence
//! - **Orchestration**: Coordinating several repositories for a single operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-table writes inside one database transaction

pub mod book;
pub mod category;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
