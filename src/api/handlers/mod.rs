//! HTTP request handlers.

pub mod book_handler;
pub mod person_handler;

pub use book_handler::book_routes;
pub use person_handler::person_routes;
