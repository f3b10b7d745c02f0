//! Person service - Handles person-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Person, PersonRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{PersonFilter, PersonRepository};

/// Person service trait for dependency injection.
#[async_trait]
pub trait PersonService: Send + Sync {
    /// List people, optionally filtered by first name and enabled flag
    async fn list_people(&self, filter: PersonFilter) -> AppResult<Vec<Person>>;

    /// Get person by ID
    async fn find_person(&self, id: i64) -> AppResult<Person>;

    /// Create a new, enabled person
    async fn create_person(&self, request: PersonRequest) -> AppResult<Person>;

    /// Update the person identified by `request.id`
    async fn update_person(&self, request: PersonRequest) -> AppResult<Person>;

    /// Mark a person as disabled
    async fn disable_person(&self, id: i64) -> AppResult<Person>;

    /// Delete a person; fails while other records reference it
    async fn delete_person(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of PersonService.
pub struct PersonManager<R: PersonRepository> {
    repo: Arc<R>,
}

impl<R: PersonRepository> PersonManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: PersonRepository> PersonService for PersonManager<R> {
    async fn list_people(&self, filter: PersonFilter) -> AppResult<Vec<Person>> {
        tracing::info!("Finding all people!");
        self.repo.list(filter).await
    }

    async fn find_person(&self, id: i64) -> AppResult<Person> {
        tracing::info!(id, "Finding one person!");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_person(&self, request: PersonRequest) -> AppResult<Person> {
        tracing::info!("Creating one person!");
        self.repo.create(request).await
    }

    async fn update_person(&self, request: PersonRequest) -> AppResult<Person> {
        tracing::info!(id = ?request.id, "Updating one person!");
        let id = request.id.ok_or_not_found()?;
        let mut person = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        person.apply(request);
        self.repo.save(person).await
    }

    async fn disable_person(&self, id: i64) -> AppResult<Person> {
        tracing::info!(id, "Disabling one person!");
        let mut person = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        person.enabled = false;
        self.repo.save(person).await
    }

    async fn delete_person(&self, id: i64) -> AppResult<()> {
        tracing::info!(id, "Deleting one person!");
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::record_not_found())
        }
    }
}
