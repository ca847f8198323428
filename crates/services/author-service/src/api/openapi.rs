//! OpenAPI documentation.

use utoipa::OpenApi;

use super::handlers::author_handler::{AuthorRequest, LoginRequest, LoginResponse};
use super::handlers::book_handler::AddBookRequest;
use super::handlers::MessageResponse;
use domain::{AuthorResponse, Book};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::author_handler::register_author,
        crate::api::handlers::author_handler::login,
        crate::api::handlers::author_handler::list_authors,
        crate::api::handlers::author_handler::list_unauthorised_authors,
        crate::api::handlers::author_handler::get_author,
        crate::api::handlers::author_handler::update_author,
        crate::api::handlers::author_handler::delete_author,
        crate::api::handlers::author_handler::approve_author,
        crate::api::handlers::author_handler::author_books,
        crate::api::handlers::book_handler::add_book,
        crate::api::handlers::book_handler::complete_book,
    ),
    components(
        schemas(
            AuthorRequest,
            LoginRequest,
            LoginResponse,
            AuthorResponse,
            AddBookRequest,
            Book,
            MessageResponse,
        )
    ),
    tags(
        (name = "Authors", description = "Author registration, approval and login"),
        (name = "Books", description = "Book operations proxied to the book services"),
    )
)]
pub struct ApiDoc;
