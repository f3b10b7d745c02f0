//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{BookManager, BookService, PersonManager, PersonService};
use crate::infra::{BookStore, PersonStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn people(&self) -> Arc<dyn PersonService>;

    fn books(&self) -> Arc<dyn BookService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    person_service: Arc<dyn PersonService>,
    book_service: Arc<dyn BookService>,
}

impl Services {
    pub fn new(person_service: Arc<dyn PersonService>, book_service: Arc<dyn BookService>) -> Self {
        Self {
            person_service,
            book_service,
        }
    }

    /// Create service container backed by the sea-orm stores
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let people = Arc::new(PersonStore::new(db.clone()));
        let books = Arc::new(BookStore::new(db));

        Self::new(
            Arc::new(PersonManager::new(people)),
            Arc::new(BookManager::new(books)),
        )
    }
}

impl ServiceContainer for Services {
    fn people(&self) -> Arc<dyn PersonService> {
        self.person_service.clone()
    }

    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }
}
