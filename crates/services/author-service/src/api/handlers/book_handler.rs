//! Book handlers, proxied to the book and book-content services.

use axum::{
    extract::{Path, State},
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::Book;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// New book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBookRequest {
    #[validate(length(min = 1, message = "Book name is required"))]
    #[schema(example = "Emma")]
    pub name: String,
    pub description: Option<String>,
    /// Owning author's email
    #[validate(email(message = "Invalid author email format"))]
    #[schema(example = "jane@example.com")]
    pub author_id: String,
}

impl From<AddBookRequest> for Book {
    fn from(request: AddBookRequest) -> Self {
        Book {
            id: None,
            name: request.name,
            description: request.description,
            author_id: request.author_id,
            author_name: String::new(),
            is_complete: false,
        }
    }
}

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_book))
        .route("/:id/complete", put(complete_book))
}

/// Add a book for an authorized author
///
/// `authorId` names the owning author. The author's stored name is attached
/// before forwarding; any `authorName` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "Books",
    request_body = AddBookRequest,
    responses(
        (status = 200, description = "Book service response", body = String),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Author missing or not yet authorized"),
        (status = 502, description = "Book service failure")
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddBookRequest>,
) -> AppResult<String> {
    state.author_service.add_book(Book::from(payload)).await
}

/// Mark a book complete once its content validates
#[utoipa::path(
    put,
    path = "/api/books/{id}/complete",
    tag = "Books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Book service response", body = String),
        (status = 422, description = "Book content is empty"),
        (status = 502, description = "Downstream service failure")
    )
)]
pub async fn complete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<String> {
    state.author_service.complete_book(&id).await
}
