//! Book repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::entities::book::{self, ActiveModel, Entity as BookEntity};
use crate::domain::Book;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// All books ordered by ID
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Insert a new book; its `id` is ignored and assigned by the database
    async fn create(&self, book: Book) -> AppResult<Book>;

    async fn save(&self, book: Book) -> AppResult<Book>;

    /// Delete book by ID; returns whether a row was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn create(&self, book: Book) -> AppResult<Book> {
        let active_model = ActiveModel {
            id: NotSet,
            author: Set(book.author),
            launch_date: Set(book.launch_date),
            price: Set(book.price),
            title: Set(book.title),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Book::from(model))
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let active_model = ActiveModel {
            id: Set(book.id),
            author: Set(book.author),
            launch_date: Set(book.launch_date),
            price: Set(book.price),
            title: Set(book.title),
        };

        let model = active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(Book::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = BookEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
