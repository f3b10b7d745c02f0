//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the person and books tables

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationState, Migrator};
pub use repositories::{
    BookRepository, BookStore, PersonFilter, PersonRepository, PersonStore,
};

#[cfg(test)]
pub use repositories::{MockBookRepository, MockPersonRepository};
