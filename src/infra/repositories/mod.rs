//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod book_repository;
pub(crate) mod entities;
mod person_repository;

pub use book_repository::{BookRepository, BookStore};
pub use person_repository::{PersonFilter, PersonRepository, PersonStore};

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use person_repository::MockPersonRepository;
