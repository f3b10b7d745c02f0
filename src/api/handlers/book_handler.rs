//! Book handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Book, BookRequest};
use crate::errors::AppResult;
use crate::problem::Problem;

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book).put(update_book))
        .route("/:id", get(find_book).delete(delete_book))
}

#[utoipa::path(
    get,
    path = "/api/book/v1",
    tag = "Books",
    responses((status = 200, description = "All books", body = Vec<Book>))
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.book_service.list_books().await?;
    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/api/book/v1/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book", body = Book),
        (status = 400, description = "Invalid ID", body = Problem),
        (status = 404, description = "Book not found", body = Problem)
    )
)]
pub async fn find_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.find_book(id).await?;
    Ok(Json(book))
}

#[utoipa::path(
    post,
    path = "/api/book/v1",
    tag = "Books",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Created book", body = Book),
        (status = 400, description = "Invalid data or incompatible body", body = Problem)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookRequest>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.create_book(payload).await?;
    Ok(Json(book))
}

#[utoipa::path(
    put,
    path = "/api/book/v1",
    tag = "Books",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Invalid data or incompatible body", body = Problem),
        (status = 404, description = "Book not found", body = Problem)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookRequest>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.update_book(payload).await?;
    Ok(Json(book))
}

#[utoipa::path(
    delete,
    path = "/api/book/v1/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = Problem),
        (status = 409, description = "Book is referenced by other records", body = Problem)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<StatusCode> {
    state.book_service.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
