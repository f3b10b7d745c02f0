//! Person repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::person::{self, ActiveModel, Entity as PersonEntity};
use crate::domain::{Person, PersonRequest};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Optional filters for listing people
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonFilter {
    /// Fragment of the first name
    pub first_name: Option<String>,
    pub enabled: Option<bool>,
}

/// Person repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Find person by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>>;

    /// List people matching the filter, ordered by ID
    async fn list(&self, filter: PersonFilter) -> AppResult<Vec<Person>>;

    /// Create a new, enabled person
    async fn create(&self, request: PersonRequest) -> AppResult<Person>;

    /// Persist every field of an existing person
    async fn save(&self, person: Person) -> AppResult<Person>;

    /// Delete person by ID; returns whether a row was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of PersonRepository
pub struct PersonStore {
    db: DatabaseConnection,
}

impl PersonStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>> {
        let result = PersonEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Person::from))
    }

    async fn list(&self, filter: PersonFilter) -> AppResult<Vec<Person>> {
        let mut query = PersonEntity::find().order_by_asc(person::Column::Id);

        if let Some(first_name) = filter.first_name {
            query = query.filter(person::Column::FirstName.contains(first_name));
        }
        if let Some(enabled) = filter.enabled {
            query = query.filter(person::Column::Enabled.eq(enabled));
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(Person::from).collect())
    }

    async fn create(&self, request: PersonRequest) -> AppResult<Person> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            address: Set(request.address),
            gender: Set(request.gender),
            enabled: Set(true),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Person::from(model))
    }

    async fn save(&self, person: Person) -> AppResult<Person> {
        let active_model = ActiveModel {
            id: Set(person.id),
            first_name: Set(person.first_name),
            last_name: Set(person.last_name),
            address: Set(person.address),
            gender: Set(person.gender),
            enabled: Set(person.enabled),
        };

        let model = active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(Person::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = PersonEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
