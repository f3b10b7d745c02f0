//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{book_handler, person_handler};
use crate::domain::{Book, BookRequest, Person, PersonRequest};
use crate::problem::{FieldProblem, Problem};

/// OpenAPI documentation for the Course API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course API",
        version = "0.1.0",
        description = "People and books REST API; every failure is answered with an application/problem+json document",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // People endpoints
        person_handler::list_people,
        person_handler::find_person,
        person_handler::create_person,
        person_handler::update_person,
        person_handler::disable_person,
        person_handler::delete_person,
        // Book endpoints
        book_handler::list_books,
        book_handler::find_book,
        book_handler::create_book,
        book_handler::update_book,
        book_handler::delete_book,
    ),
    components(
        schemas(
            Person,
            PersonRequest,
            Book,
            BookRequest,
            // Error responses
            Problem,
            FieldProblem,
        )
    ),
    tags(
        (name = "People", description = "Endpoints for managing people"),
        (name = "Books", description = "Endpoints for managing books")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_problem_schema_and_paths() {
        let doc = ApiDoc::openapi();

        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("Problem"));
        assert!(schemas.contains_key("FieldProblem"));
        assert!(doc.paths.paths.contains_key("/api/person/v1/{id}"));
        assert!(doc.paths.paths.contains_key("/api/book/v1"));
    }
}
