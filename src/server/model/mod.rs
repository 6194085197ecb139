//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and validated on construction, so services
//! only ever see well-formed input.

pub mod book;
pub mod category;
pub mod review;
pub mod user;
