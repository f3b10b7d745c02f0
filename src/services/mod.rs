//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod book_service;
pub mod container;
mod person_service;

pub use container::{ServiceContainer, Services};

pub use book_service::{BookManager, BookService};
pub use person_service::{PersonManager, PersonService};
