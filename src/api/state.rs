//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::problem::{Locale, MessageCatalog, ProblemTranslator};
use crate::services::{BookService, PersonService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Person service
    pub person_service: Arc<dyn PersonService>,
    /// Book service
    pub book_service: Arc<dyn BookService>,
    /// Shared error-to-problem translator
    pub translator: ProblemTranslator,
    /// Locale used when `Accept-Language` names nothing supported
    pub default_locale: Locale,
    /// Database connection, absent when services are injected directly
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.connection());

        Self::new(container.people(), container.books(), config.default_locale)
            .with_database(database)
    }

    /// Create new application state with manually injected services.
    pub fn new(
        person_service: Arc<dyn PersonService>,
        book_service: Arc<dyn BookService>,
        default_locale: Locale,
    ) -> Self {
        Self {
            person_service,
            book_service,
            translator: ProblemTranslator::new(Arc::new(MessageCatalog::new())),
            default_locale,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
