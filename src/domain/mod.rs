//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod book;
pub mod person;
pub mod validation;

pub use book::{Book, BookRequest};
pub use person::{Person, PersonRequest};
pub use validation::ValidatedPayload;
