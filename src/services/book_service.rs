//! Book service - Handles book-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Book, BookRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::BookRepository;

#[async_trait]
pub trait BookService: Send + Sync {
    async fn list_books(&self) -> AppResult<Vec<Book>>;

    async fn find_book(&self, id: i64) -> AppResult<Book>;

    async fn create_book(&self, request: BookRequest) -> AppResult<Book>;

    /// Update the book identified by `request.id`
    async fn update_book(&self, request: BookRequest) -> AppResult<Book>;

    async fn delete_book(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of BookService.
pub struct BookManager<R: BookRepository> {
    repo: Arc<R>,
}

impl<R: BookRepository> BookManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: BookRepository> BookService for BookManager<R> {
    async fn list_books(&self) -> AppResult<Vec<Book>> {
        tracing::info!("Finding all books!");
        self.repo.list().await
    }

    async fn find_book(&self, id: i64) -> AppResult<Book> {
        tracing::info!(id, "Finding one book!");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_book(&self, request: BookRequest) -> AppResult<Book> {
        tracing::info!("Creating one book!");
        let book = Book::try_from(request).map_err(AppError::Validation)?;
        self.repo.create(book).await
    }

    async fn update_book(&self, request: BookRequest) -> AppResult<Book> {
        tracing::info!(id = ?request.id, "Updating one book!");
        let id = request.id.ok_or_not_found()?;
        self.repo.find_by_id(id).await?.ok_or_not_found()?;

        let book = Book::try_from(request).map_err(AppError::Validation)?;
        self.repo.save(book).await
    }

    async fn delete_book(&self, id: i64) -> AppResult<()> {
        tracing::info!(id, "Deleting one book!");
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::record_not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::MockBookRepository;
    use crate::problem::ErrorKind;

    fn book(id: i64) -> Book {
        Book {
            id,
            author: "Author Test 1".to_string(),
            launch_date: Utc.with_ymd_and_hms(2017, 11, 29, 13, 50, 5).unwrap(),
            price: 11.5,
            title: "Test book 1".to_string(),
        }
    }

    #[tokio::test]
    async fn find_book_success() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(book(id))));

        let found = BookManager::new(Arc::new(repo)).find_book(1).await.unwrap();

        assert_eq!(found, book(1));
    }

    #[tokio::test]
    async fn update_book_keeps_id() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(book(id))));
        repo.expect_save().returning(Ok);

        let request = BookRequest {
            id: Some(3),
            author: "Michael C. Feathers".to_string(),
            launch_date: Some(Utc.with_ymd_and_hms(2004, 9, 22, 0, 0, 0).unwrap()),
            price: 49.0,
            title: "Working effectively with legacy code".to_string(),
        };

        let updated = BookManager::new(Arc::new(repo))
            .update_book(request)
            .await
            .unwrap();

        assert_eq!(updated.id, 3);
        assert_eq!(updated.price, 49.0);
    }

    #[tokio::test]
    async fn create_book_without_launch_date_never_reaches_the_store() {
        let mut repo = MockBookRepository::new();
        repo.expect_create().never();

        let request = BookRequest {
            id: None,
            author: "Author Test 1".to_string(),
            launch_date: None,
            price: 11.5,
            title: "Test book 1".to_string(),
        };

        let err = BookManager::new(Arc::new(repo))
            .create_book(request)
            .await
            .unwrap_err();

        match err.kind() {
            ErrorKind::ValidationFailed(report) => {
                assert_eq!(report.violations[0].field.as_deref(), Some("launch_date"));
                assert_eq!(report.violations[0].code, "not_null");
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_missing_book_is_not_found() {
        let mut repo = MockBookRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let err = BookManager::new(Arc::new(repo))
            .delete_book(8)
            .await
            .unwrap_err();

        assert_eq!(
            err.kind(),
            ErrorKind::EntityNotFound("No records found for this ID!".to_string())
        );
    }
}
